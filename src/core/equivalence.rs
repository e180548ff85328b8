use crate::core::catalog::{Catalog, ComparisonItem};

pub const MAX_EQUIVALENCES: usize = 3;

/// 31-multiplier string hash over UTF-16 code units with 32-bit wrapping,
/// reported as an absolute value. Results must stay identical across
/// releases, since shared links rely on the ordering it produces.
pub fn stable_hash(s: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

/// Costs within the same hundred share a seed, and therefore an ordering.
pub fn seed_for(annual_cost: f64) -> i64 {
    (annual_cost / 100.0).round() as i64
}

pub fn rank(item: &ComparisonItem, seed: i64) -> u32 {
    stable_hash(&format!("{}{}", item.id, seed))
}

/// Picks up to [`MAX_EQUIVALENCES`] comparisons for an annual cost.
///
/// Only items whose threshold the cost reaches are considered. The salary
/// comparison goes first when it qualifies; the rest are ordered by
/// [`rank`] (catalog order on ties) and skipped when they would show a
/// count of zero. An empty result means nothing qualifies.
pub fn select_equivalences<'a>(
    annual_cost: f64,
    annual_salary: f64,
    catalog: &'a Catalog,
) -> Vec<&'a ComparisonItem> {
    let relevant: Vec<&ComparisonItem> = catalog
        .items()
        .iter()
        .filter(|item| item.is_relevant(annual_cost))
        .filter(|item| item.divisor(annual_salary).is_some())
        .collect();

    let mut picked: Vec<&ComparisonItem> = Vec::with_capacity(MAX_EQUIVALENCES);
    if let Some(salary) = relevant.iter().copied().find(|item| item.is_salary_equivalence()) {
        picked.push(salary);
    }

    let seed = seed_for(annual_cost);
    let mut rest: Vec<&ComparisonItem> = relevant
        .into_iter()
        .filter(|item| !item.is_salary_equivalence())
        .collect();
    rest.sort_by_cached_key(|item| rank(item, seed));

    for item in rest {
        if picked.len() >= MAX_EQUIVALENCES {
            break;
        }
        match item.count(annual_cost, annual_salary) {
            Some(count) if count > 0 => picked.push(item),
            _ => tracing::trace!("skipping comparison '{}' with no whole units", item.id),
        }
    }

    tracing::debug!(
        "selected {} equivalences for annual cost {:.2} (seed {})",
        picked.len(),
        annual_cost,
        seed
    );

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&ComparisonItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_stable_hash_known_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
        assert_eq!(stable_hash("coffee109"), 681_654_958);
    }

    #[test]
    fn test_stable_hash_wraps_and_takes_absolute_value() {
        // Long inputs overflow 32 bits; the result is still a non-negative i32 magnitude.
        let h = stable_hash("online-course-subscription-with-a-very-long-identifier");
        assert!(h <= 1 << 31);
    }

    #[test]
    fn test_seed_rounds_to_nearest_hundred() {
        assert_eq!(seed_for(10_937.5), 109);
        assert_eq!(seed_for(10_950.0), 110);
        assert_eq!(seed_for(49.0), 0);
    }

    #[test]
    fn test_below_every_threshold_is_empty() {
        let catalog = Catalog::standard();
        assert!(select_equivalences(49.99, 150_000.0, &catalog).is_empty());
        assert!(select_equivalences(0.0, 150_000.0, &catalog).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = Catalog::standard();
        assert_eq!(ids(&select_equivalences(50.0, 150_000.0, &catalog)), ["coffee"]);
    }

    #[test]
    fn test_salary_comparison_comes_first() {
        let catalog = Catalog::standard();
        for cost in [500.0, 2_500.0, 10_937.5, 250_000.0, 3_000_000.0] {
            let picked = select_equivalences(cost, 150_000.0, &catalog);
            assert!(picked[0].is_salary_equivalence(), "cost {cost}");
            assert!(picked.len() <= MAX_EQUIVALENCES);
        }
    }

    #[test]
    fn test_reference_cost_ordering() {
        let catalog = Catalog::standard();
        let picked = select_equivalences(10_937.5, 150_000.0, &catalog);
        assert_eq!(ids(&picked), ["salary-weeks", "pizza", "coffee"]);
    }

    #[test]
    fn test_unusable_salary_is_excluded() {
        let catalog = Catalog::standard();
        let picked = select_equivalences(10_937.5, 0.0, &catalog);
        assert_eq!(ids(&picked), ["pizza", "coffee", "rent"]);
    }

    #[test]
    fn test_zero_count_items_are_skipped_without_stopping() {
        let catalog = Catalog::new(vec![
            ComparisonItem::fixed("yacht", "🛥️", "yachts", 1_000_000.0, 0.0),
            ComparisonItem::fixed("gum", "🍬", "packs of gum", 1.0, 0.0),
        ])
        .unwrap();

        let picked = select_equivalences(100.0, 150_000.0, &catalog);
        assert_eq!(ids(&picked), ["gum"]);
    }

    #[test]
    fn test_equal_ranks_keep_catalog_order() {
        // "Aa" and "BB" collide under the 31-multiplier hash for any suffix.
        assert_eq!(stable_hash("Aa1"), stable_hash("BB1"));

        let forward = Catalog::new(vec![
            ComparisonItem::fixed("Aa", "1️⃣", "firsts", 1.0, 0.0),
            ComparisonItem::fixed("BB", "2️⃣", "seconds", 1.0, 0.0),
        ])
        .unwrap();
        let reversed = Catalog::new(vec![
            ComparisonItem::fixed("BB", "2️⃣", "seconds", 1.0, 0.0),
            ComparisonItem::fixed("Aa", "1️⃣", "firsts", 1.0, 0.0),
        ])
        .unwrap();

        assert_eq!(ids(&select_equivalences(1_234.0, 150_000.0, &forward)), ["Aa", "BB"]);
        assert_eq!(ids(&select_equivalences(1_234.0, 150_000.0, &reversed)), ["BB", "Aa"]);
    }
}
