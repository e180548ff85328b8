use crate::utils::error::{MeetingCostError, Result};
use crate::utils::validation::{validate_allowed, validate_range};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WORKING_HOURS_PER_YEAR: f64 = 2080.0;
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const MIN_ATTENDEES: u32 = 2;
pub const MAX_ATTENDEES: u32 = 50;
pub const MIN_SALARY: u32 = 20_000;
pub const MAX_SALARY: u32 = 1_000_000;
pub const ALLOWED_DURATIONS: [u32; 6] = [15, 25, 30, 45, 60, 90];
pub const ALLOWED_PREP_MINUTES: [u32; 5] = [0, 5, 10, 15, 30];
pub const SALARY_PRESETS: [u32; 4] = [120_000, 130_000, 150_000, 200_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Once,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Meetings per year.
    pub fn yearly_multiplier(&self) -> f64 {
        match self {
            Frequency::Once => 1.0,
            Frequency::Daily => WORKING_DAYS_PER_YEAR,
            Frequency::Weekly => WEEKS_PER_YEAR,
            Frequency::Biweekly => 26.0,
            Frequency::Monthly => MONTHS_PER_YEAR,
        }
    }

    /// Meetings per month. A one-off meeting has no monthly rate.
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            Frequency::Once => 0.0,
            Frequency::Daily => WORKING_DAYS_PER_YEAR / MONTHS_PER_YEAR,
            Frequency::Weekly => WEEKS_PER_YEAR / MONTHS_PER_YEAR,
            Frequency::Biweekly => 26.0 / MONTHS_PER_YEAR,
            Frequency::Monthly => 1.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = MeetingCostError;

    fn from_str(s: &str) -> Result<Self> {
        Frequency::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                MeetingCostError::invalid_value(
                    "frequency",
                    s,
                    "Allowed values: once, daily, weekly, biweekly, monthly",
                )
            })
    }
}

/// A validated parameter set. Every instance holds in-domain values, so
/// [`crate::core::cost_engine::calculate`] never has to reject one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeetingParameters {
    attendees: u32,
    annual_salary: u32,
    duration_minutes: u32,
    frequency: Frequency,
    prep_minutes: u32,
}

impl MeetingParameters {
    pub fn new(
        attendees: u32,
        annual_salary: u32,
        duration_minutes: u32,
        frequency: Frequency,
        prep_minutes: u32,
    ) -> Result<Self> {
        validate_range("attendees", attendees, MIN_ATTENDEES, MAX_ATTENDEES)?;
        validate_range("salary", annual_salary, MIN_SALARY, MAX_SALARY)?;
        validate_allowed("duration", duration_minutes, &ALLOWED_DURATIONS)?;
        validate_allowed("prep", prep_minutes, &ALLOWED_PREP_MINUTES)?;

        Ok(Self {
            attendees,
            annual_salary,
            duration_minutes,
            frequency,
            prep_minutes,
        })
    }

    pub fn attendees(&self) -> u32 {
        self.attendees
    }

    pub fn annual_salary(&self) -> u32 {
        self.annual_salary
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn prep_minutes(&self) -> u32 {
        self.prep_minutes
    }

    pub fn total_minutes(&self) -> u32 {
        self.duration_minutes + self.prep_minutes
    }

    pub fn is_preset_salary(&self) -> bool {
        SALARY_PRESETS.contains(&self.annual_salary)
    }
}

impl Default for MeetingParameters {
    fn default() -> Self {
        Self {
            attendees: 5,
            annual_salary: 150_000,
            duration_minutes: 30,
            frequency: Frequency::Weekly,
            prep_minutes: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostMetrics {
    pub hourly_rate: f64,
    pub cost_per_meeting: f64,
    pub prep_cost_per_meeting: f64,
    pub cost_monthly: f64,
    pub cost_annual: f64,
    pub hours_annual: f64,
    pub prep_cost_annual: f64,
}

/// Partial parameter set contributed by one input layer (flags, config file, share link).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    pub attendees: Option<u32>,
    #[serde(rename = "salary")]
    pub annual_salary: Option<u32>,
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
    pub frequency: Option<Frequency>,
    #[serde(rename = "prep")]
    pub prep_minutes: Option<u32>,
}

impl ParameterOverrides {
    /// Fields set in `later` win over fields set in `self`.
    pub fn merge(self, later: ParameterOverrides) -> ParameterOverrides {
        ParameterOverrides {
            attendees: later.attendees.or(self.attendees),
            annual_salary: later.annual_salary.or(self.annual_salary),
            duration_minutes: later.duration_minutes.or(self.duration_minutes),
            frequency: later.frequency.or(self.frequency),
            prep_minutes: later.prep_minutes.or(self.prep_minutes),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ParameterOverrides::default()
    }

    /// Fills unset fields from the defaults and validates the result.
    pub fn resolve(&self) -> Result<MeetingParameters> {
        let base = MeetingParameters::default();
        MeetingParameters::new(
            self.attendees.unwrap_or(base.attendees),
            self.annual_salary.unwrap_or(base.annual_salary),
            self.duration_minutes.unwrap_or(base.duration_minutes),
            self.frequency.unwrap_or(base.frequency),
            self.prep_minutes.unwrap_or(base.prep_minutes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let d = MeetingParameters::default();
        let rebuilt = MeetingParameters::new(
            d.attendees(),
            d.annual_salary(),
            d.duration_minutes(),
            d.frequency(),
            d.prep_minutes(),
        )
        .unwrap();
        assert_eq!(d, rebuilt);
    }

    #[test]
    fn test_new_rejects_out_of_domain_values() {
        assert!(MeetingParameters::new(1, 150_000, 30, Frequency::Weekly, 5).is_err());
        assert!(MeetingParameters::new(51, 150_000, 30, Frequency::Weekly, 5).is_err());
        assert!(MeetingParameters::new(5, 19_999, 30, Frequency::Weekly, 5).is_err());
        assert!(MeetingParameters::new(5, 1_000_001, 30, Frequency::Weekly, 5).is_err());
        assert!(MeetingParameters::new(5, 150_000, 20, Frequency::Weekly, 5).is_err());
        assert!(MeetingParameters::new(5, 150_000, 30, Frequency::Weekly, 7).is_err());
    }

    #[test]
    fn test_preset_salary() {
        assert!(MeetingParameters::default().is_preset_salary());
        let custom = MeetingParameters::new(5, 95_000, 30, Frequency::Weekly, 5).unwrap();
        assert!(!custom.is_preset_salary());
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("biweekly".parse::<Frequency>().unwrap(), Frequency::Biweekly);
        assert!("yearly".parse::<Frequency>().is_err());
        assert!("Weekly".parse::<Frequency>().is_err());
        for f in Frequency::ALL {
            assert_eq!(f.as_str().parse::<Frequency>().unwrap(), f);
        }
    }

    #[test]
    fn test_once_has_no_monthly_rate() {
        assert_eq!(Frequency::Once.monthly_multiplier(), 0.0);
        assert_eq!(Frequency::Once.yearly_multiplier(), 1.0);
    }

    #[test]
    fn test_overrides_merge_later_wins() {
        let file = ParameterOverrides {
            attendees: Some(8),
            frequency: Some(Frequency::Daily),
            ..Default::default()
        };
        let flags = ParameterOverrides {
            attendees: Some(12),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.attendees, Some(12));
        assert_eq!(merged.frequency, Some(Frequency::Daily));
        assert_eq!(merged.annual_salary, None);

        let params = merged.resolve().unwrap();
        assert_eq!(params.attendees(), 12);
        assert_eq!(params.annual_salary(), 150_000);
    }
}
