use crate::config::share_url::{encode_share_url, DEFAULT_SHARE_BASE};
use crate::core::catalog::Catalog;
use crate::core::cost_engine::{calculate, show_prep_breakdown};
use crate::core::equivalence::select_equivalences;
use crate::core::format::render_equivalence;
use crate::core::report::{EquivalenceLine, MeetingReport, ShareLinks};
use crate::domain::model::MeetingParameters;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

/// Turns a parameter set into a full report. Holds only read-only data, so
/// one engine can serve any number of calls.
#[derive(Debug, Clone)]
pub struct MeetingCostEngine {
    catalog: Catalog,
    share_base: String,
}

impl MeetingCostEngine {
    pub fn new(catalog: Catalog, share_base: impl Into<String>) -> Result<Self> {
        let share_base = share_base.into();
        validate_url("share.base_url", &share_base)?;
        Ok(Self {
            catalog,
            share_base,
        })
    }

    pub fn run(&self, params: &MeetingParameters) -> Result<MeetingReport> {
        tracing::debug!("Calculating meeting cost for {:?}", params);
        let metrics = calculate(params);
        let salary = f64::from(params.annual_salary());

        let equivalences: Vec<EquivalenceLine> =
            select_equivalences(metrics.cost_annual, salary, &self.catalog)
                .into_iter()
                .filter_map(|item| {
                    let count = item.count(metrics.cost_annual, salary)?;
                    let text = render_equivalence(item, metrics.cost_annual, salary)?;
                    Some(EquivalenceLine {
                        id: item.id.clone(),
                        emoji: item.emoji.clone(),
                        count,
                        text,
                    })
                })
                .collect();

        if equivalences.is_empty() {
            tracing::debug!(
                "No comparison reaches annual cost {:.2}; hiding equivalences",
                metrics.cost_annual
            );
        }

        let share_url = encode_share_url(&self.share_base, params)?;
        let share = ShareLinks::new(&share_url, params, &metrics)?;

        tracing::info!(
            "Annual cost {:.2} across {:.1} hours, {} comparisons",
            metrics.cost_annual,
            metrics.hours_annual,
            equivalences.len()
        );

        Ok(MeetingReport {
            parameters: *params,
            metrics,
            show_prep_breakdown: show_prep_breakdown(params),
            equivalences,
            share,
        })
    }
}

impl Default for MeetingCostEngine {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            share_base: DEFAULT_SHARE_BASE.to_string(),
        }
    }
}
