use crate::core::format::{compact_dollars, group_thousands, headline_figure};
use crate::domain::model::{CostMetrics, Frequency, MeetingParameters};
use crate::utils::error::{MeetingCostError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivalenceLine {
    pub id: String,
    pub emoji: String,
    pub count: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareLinks {
    pub url: String,
    pub message: String,
    pub tweet_url: String,
}

impl ShareLinks {
    pub fn new(share_url: &Url, params: &MeetingParameters, metrics: &CostMetrics) -> Result<Self> {
        let message = share_message(params, metrics);
        let tweet_url = Url::parse_with_params(
            TWEET_INTENT_URL,
            &[("text", message.as_str()), ("url", share_url.as_str())],
        )?;

        Ok(Self {
            url: share_url.to_string(),
            message,
            tweet_url: tweet_url.to_string(),
        })
    }
}

pub fn share_message(params: &MeetingParameters, metrics: &CostMetrics) -> String {
    format!(
        "Our {}-min meeting with {} people costs ${} per session — that's ${}/year! 😱\n\nCalculate yours:",
        params.duration_minutes(),
        params.attendees(),
        group_thousands(metrics.cost_per_meeting.round() as i64),
        compact_dollars(metrics.cost_annual.round() as i64),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingReport {
    pub parameters: MeetingParameters,
    pub metrics: CostMetrics,
    pub show_prep_breakdown: bool,
    pub equivalences: Vec<EquivalenceLine>,
    pub share: ShareLinks,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    attendees: u32,
    salary: u32,
    duration: u32,
    frequency: Frequency,
    prep: u32,
    cost_per_meeting: f64,
    cost_monthly: f64,
    cost_annual: f64,
    hours_annual: f64,
    prep_cost_annual: f64,
    share_url: &'a str,
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MeetingReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_csv(&self) -> Result<String> {
        let p = &self.parameters;
        let m = &self.metrics;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(CsvRow {
            attendees: p.attendees(),
            salary: p.annual_salary(),
            duration: p.duration_minutes(),
            frequency: p.frequency(),
            prep: p.prep_minutes(),
            cost_per_meeting: cents(m.cost_per_meeting),
            cost_monthly: cents(m.cost_monthly),
            cost_annual: cents(m.cost_annual),
            hours_annual: cents(m.hours_annual),
            prep_cost_annual: cents(m.prep_cost_annual),
            share_url: &self.share.url,
        })?;

        let bytes = writer
            .into_inner()
            .map_err(|e| MeetingCostError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| MeetingCostError::ValidationError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

impl fmt::Display for MeetingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.parameters;
        let m = &self.metrics;

        writeln!(
            f,
            "Meeting: {} people, {} min + {} min prep, {}, ${} salary{}",
            p.attendees(),
            p.duration_minutes(),
            p.prep_minutes(),
            p.frequency(),
            group_thousands(i64::from(p.annual_salary())),
            if p.is_preset_salary() { " (preset)" } else { "" },
        )?;

        let monthly_label = match p.frequency() {
            Frequency::Once => "One-time cost:",
            _ => "Monthly cost:",
        };
        writeln!(f, "{:<18}${}", "Cost per meeting:", headline_figure(m.cost_per_meeting))?;
        writeln!(f, "{:<18}${}", monthly_label, headline_figure(m.cost_monthly))?;
        writeln!(f, "{:<18}${}", "Annual cost:", headline_figure(m.cost_annual))?;
        writeln!(f, "{:<18}{}", "Hours per year:", headline_figure(m.hours_annual))?;

        if self.show_prep_breakdown {
            writeln!(
                f,
                "Prep time alone costs ${}/year",
                compact_dollars(m.prep_cost_annual.round() as i64)
            )?;
        }

        if !self.equivalences.is_empty() {
            writeln!(f, "\nThat's the same as:")?;
            for line in &self.equivalences {
                writeln!(f, "  {} {}", line.emoji, line.text)?;
            }
        }

        writeln!(f, "\nShare: {}", self.share.url)
    }
}
