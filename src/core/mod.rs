pub mod catalog;
pub mod cost_engine;
pub mod engine;
pub mod equivalence;
pub mod format;
pub mod report;

pub use crate::domain::model::{CostMetrics, Frequency, MeetingParameters, ParameterOverrides};
pub use crate::domain::ports::ParameterSource;
pub use crate::utils::error::Result;
