#[cfg(feature = "cli")]
pub mod cli;
pub mod share_url;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::{MeetingParameters, ParameterOverrides};
use crate::domain::ports::ParameterSource;
use crate::utils::error::Result;

/// Layers the sources in order (later wins per field), fills the rest from
/// the defaults and validates the merged set once.
pub fn resolve_parameters(sources: &[&dyn ParameterSource]) -> Result<MeetingParameters> {
    let mut merged = ParameterOverrides::default();
    for source in sources {
        let layer = source.overrides()?;
        if !layer.is_empty() {
            tracing::debug!("Applying parameters from {}: {:?}", source.source_name(), layer);
        }
        merged = merged.merge(layer);
    }
    merged.resolve()
}
