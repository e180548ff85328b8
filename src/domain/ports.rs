use crate::domain::model::ParameterOverrides;
use crate::utils::error::Result;

pub trait ParameterSource {
    fn source_name(&self) -> &str;
    fn overrides(&self) -> Result<ParameterOverrides>;
}
