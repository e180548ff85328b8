//! Display formatting for figures and comparisons. Nothing here feeds back
//! into calculation or selection.

use crate::core::catalog::ComparisonItem;

/// Headline figures switch to the compact form from this magnitude on.
pub const COMPACT_FROM: i64 = 10_000;

/// en-US digit grouping: `1234567` becomes `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `12_500` becomes `"12.5k"`, `3_000_000` becomes `"3M"`; small amounts are grouped.
pub fn compact_dollars(n: i64) -> String {
    if n >= 1_000_000 {
        one_decimal(n, 1_000_000) + "M"
    } else if n >= COMPACT_FROM {
        one_decimal(n, 1_000) + "k"
    } else {
        group_thousands(n)
    }
}

// One decimal of the binary quotient, exact ties rounding up, trailing ".0" dropped.
// 10_350 / 1_000 is stored just below 10.35 and so renders as "10.3".
fn one_decimal(n: i64, unit: i64) -> String {
    let value = n as f64 / unit as f64;
    let quarters = value * 4.0;
    // Only x.25 and x.75 sit exactly halfway between tenths.
    let fixed = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (quarters * 2.5).ceil() as i64;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", value)
    };
    match fixed.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

pub fn headline_figure(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded.abs() >= COMPACT_FROM {
        compact_dollars(rounded)
    } else {
        group_thousands(rounded)
    }
}

/// `"5 MacBook Pros"`. `None` when the item has no usable divisor.
pub fn render_equivalence(
    item: &ComparisonItem,
    annual_cost: f64,
    annual_salary: f64,
) -> Option<String> {
    item.count(annual_cost, annual_salary)
        .map(|count| format!("{} {}", group_thousands(count), item.label))
}
