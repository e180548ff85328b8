use crate::core::report::OutputFormat;
use crate::domain::model::{Frequency, ParameterOverrides};
use crate::domain::ports::ParameterSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "meeting-cost", version)]
#[command(about = "Calculate what a recurring meeting really costs")]
pub struct CliConfig {
    /// Number of people in the meeting (2-50)
    #[arg(short, long)]
    pub attendees: Option<u32>,

    /// Average annual salary per attendee (20000-1000000)
    #[arg(short, long)]
    pub salary: Option<u32>,

    /// Meeting length in minutes (15, 25, 30, 45, 60 or 90)
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// once, daily, weekly, biweekly or monthly
    #[arg(short, long)]
    pub frequency: Option<Frequency>,

    /// Prep minutes per attendee (0, 5, 10, 15 or 30)
    #[arg(short, long)]
    pub prep: Option<u32>,

    /// Load parameters from a shared link or query string
    #[arg(long, value_name = "URL")]
    pub from_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Base URL for generated share links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ParameterSource for CliConfig {
    fn source_name(&self) -> &str {
        "command line"
    }

    fn overrides(&self) -> Result<ParameterOverrides> {
        Ok(ParameterOverrides {
            attendees: self.attendees,
            annual_salary: self.salary,
            duration_minutes: self.duration,
            frequency: self.frequency,
            prep_minutes: self.prep,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        self.overrides()?.resolve()?;
        Ok(())
    }
}
