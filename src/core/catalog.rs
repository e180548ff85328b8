use crate::domain::model::WEEKS_PER_YEAR;
use crate::utils::error::{MeetingCostError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a comparison turns an annual cost into a count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measure {
    /// `annual_cost / divisor`, e.g. the price of one coffee.
    Fixed { divisor: f64 },
    /// Weeks of one attendee's salary. This is the reserved salary-equivalence
    /// category and is always listed first when it qualifies.
    SalaryWeeks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub id: String,
    pub emoji: String,
    pub label: String,
    pub min_threshold: f64,
    #[serde(flatten)]
    pub measure: Measure,
}

impl ComparisonItem {
    pub fn fixed(id: &str, emoji: &str, label: &str, divisor: f64, min_threshold: f64) -> Self {
        Self {
            id: id.to_string(),
            emoji: emoji.to_string(),
            label: label.to_string(),
            min_threshold,
            measure: Measure::Fixed { divisor },
        }
    }

    pub fn salary_weeks(id: &str, emoji: &str, label: &str, min_threshold: f64) -> Self {
        Self {
            id: id.to_string(),
            emoji: emoji.to_string(),
            label: label.to_string(),
            min_threshold,
            measure: Measure::SalaryWeeks,
        }
    }

    pub fn is_salary_equivalence(&self) -> bool {
        matches!(self.measure, Measure::SalaryWeeks)
    }

    pub fn is_relevant(&self, annual_cost: f64) -> bool {
        self.min_threshold <= annual_cost
    }

    /// The cost of one unit. `None` when it would not be a usable divisor,
    /// e.g. a salary that resolves to zero.
    pub fn divisor(&self, annual_salary: f64) -> Option<f64> {
        let divisor = match self.measure {
            Measure::Fixed { divisor } => divisor,
            Measure::SalaryWeeks => annual_salary / WEEKS_PER_YEAR,
        };
        (divisor.is_finite() && divisor > 0.0).then_some(divisor)
    }

    /// Rounded number of units the annual cost buys.
    pub fn count(&self, annual_cost: f64, annual_salary: f64) -> Option<i64> {
        self.divisor(annual_salary)
            .map(|divisor| (annual_cost / divisor).round() as i64)
    }
}

/// Ordered, read-only set of comparisons. Order matters: it breaks ranking ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    items: Vec<ComparisonItem>,
}

impl Catalog {
    pub fn new(items: Vec<ComparisonItem>) -> Result<Self> {
        let catalog = Self { items };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn standard() -> Self {
        Self {
            items: vec![
                ComparisonItem::fixed("macbook", "💻", "MacBook Pros", 1999.0, 1999.0),
                ComparisonItem::fixed("netflix", "🎬", "months of Netflix", 15.49, 100.0),
                ComparisonItem::fixed("coffee", "☕", "cups of fancy coffee", 6.0, 50.0),
                ComparisonItem::fixed("car-payment", "🚗", "monthly car payments", 400.0, 400.0),
                ComparisonItem::fixed("flight", "✈️", "round-trip flights", 350.0, 350.0),
                ComparisonItem::fixed("rent", "🏠", "months of rent", 2000.0, 2000.0),
                ComparisonItem::salary_weeks(
                    "salary-weeks",
                    "👩‍💻",
                    "weeks of one person's salary",
                    500.0,
                ),
                ComparisonItem::fixed("pizza", "🍕", "team pizza lunches", 20.0, 100.0),
                ComparisonItem::fixed("iphone", "📱", "iPhones", 999.0, 999.0),
                ComparisonItem::fixed("course", "🎓", "online course subscriptions", 500.0, 500.0),
            ],
        }
    }

    pub fn items(&self) -> &[ComparisonItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ComparisonItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(MeetingCostError::ConfigValidationError {
                field: "comparisons".to_string(),
                message: "catalog must contain at least one comparison".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            validate_non_empty_string("comparisons.id", &item.id)?;
            validate_non_empty_string("comparisons.label", &item.label)?;

            if !seen.insert(item.id.as_str()) {
                return Err(MeetingCostError::invalid_value(
                    "comparisons.id",
                    &item.id,
                    "Comparison ids must be unique",
                ));
            }

            if !item.min_threshold.is_finite() || item.min_threshold < 0.0 {
                return Err(MeetingCostError::invalid_value(
                    "comparisons.min_threshold",
                    item.min_threshold,
                    "Threshold must be a finite, non-negative amount",
                ));
            }

            if let Measure::Fixed { divisor } = item.measure {
                if !divisor.is_finite() || divisor <= 0.0 {
                    return Err(MeetingCostError::invalid_value(
                        "comparisons.divisor",
                        divisor,
                        "Divisor must be a finite, positive amount",
                    ));
                }
            }
        }

        Ok(())
    }
}
