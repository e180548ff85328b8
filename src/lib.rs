pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{resolve_parameters, share_url::SharedLink, toml_config::TomlConfig};
pub use crate::core::{
    catalog::{Catalog, ComparisonItem, Measure},
    cost_engine::calculate,
    engine::MeetingCostEngine,
    equivalence::select_equivalences,
    report::{MeetingReport, OutputFormat},
};
pub use crate::domain::model::{CostMetrics, Frequency, MeetingParameters};
pub use crate::utils::error::{MeetingCostError, Result};
