use crate::domain::model::{CostMetrics, Frequency, MeetingParameters, WORKING_HOURS_PER_YEAR};

/// Derives per-meeting, monthly and annual costs from a parameter set.
///
/// Total over the validated domain: there is no error case and no state, so the
/// same parameters always produce bit-identical metrics.
pub fn calculate(params: &MeetingParameters) -> CostMetrics {
    let attendees = f64::from(params.attendees());
    let prep_minutes = f64::from(params.prep_minutes());
    let total_minutes = f64::from(params.total_minutes());
    let frequency = params.frequency();

    let hourly_rate = f64::from(params.annual_salary()) / WORKING_HOURS_PER_YEAR;
    let cost_per_meeting = (hourly_rate * total_minutes / 60.0) * attendees;
    let prep_cost_per_meeting = (hourly_rate * prep_minutes / 60.0) * attendees;

    let yearly = frequency.yearly_multiplier();
    let cost_annual = cost_per_meeting * yearly;
    let cost_monthly = if frequency == Frequency::Once {
        cost_per_meeting
    } else {
        cost_per_meeting * frequency.monthly_multiplier()
    };
    let hours_annual = (total_minutes / 60.0) * attendees * yearly;
    let prep_cost_annual = prep_cost_per_meeting * yearly;

    CostMetrics {
        hourly_rate,
        cost_per_meeting,
        prep_cost_per_meeting,
        cost_monthly,
        cost_annual,
        hours_annual,
        prep_cost_annual,
    }
}

/// The prep breakdown only makes sense for recurring meetings that have prep time.
pub fn show_prep_breakdown(params: &MeetingParameters) -> bool {
    params.prep_minutes() > 0 && params.frequency() != Frequency::Once
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ALLOWED_DURATIONS, ALLOWED_PREP_MINUTES};

    fn params(a: u32, s: u32, d: u32, f: Frequency, p: u32) -> MeetingParameters {
        MeetingParameters::new(a, s, d, f, p).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_weekly_reference_meeting() {
        let m = calculate(&params(5, 150_000, 30, Frequency::Weekly, 5));

        assert_close(m.hourly_rate, 72.115);
        assert_close(m.cost_per_meeting, 210.34);
        assert_close(m.cost_annual, 10_937.5);
        assert_close(m.hours_annual, 151.67);
        assert_close(m.cost_monthly, 911.458);
        assert_close(m.prep_cost_annual, 72.115 * 5.0 / 60.0 * 5.0 * 52.0);
    }

    #[test]
    fn test_annual_is_per_meeting_times_multiplier() {
        for f in Frequency::ALL {
            let m = calculate(&params(7, 98_000, 45, f, 10));
            assert_eq!(m.cost_annual, m.cost_per_meeting * f.yearly_multiplier());
        }
    }

    #[test]
    fn test_once_monthly_equals_per_meeting() {
        for d in ALLOWED_DURATIONS {
            let m = calculate(&params(12, 80_000, d, Frequency::Once, 0));
            assert_eq!(m.cost_monthly, m.cost_per_meeting);
            assert_eq!(m.cost_annual, m.cost_per_meeting);
            assert_close(m.hours_annual, f64::from(d) / 60.0 * 12.0);
        }
    }

    #[test]
    fn test_zero_prep_has_zero_prep_cost() {
        let m = calculate(&params(5, 150_000, 30, Frequency::Daily, 0));
        assert_eq!(m.prep_cost_per_meeting, 0.0);
        assert_eq!(m.prep_cost_annual, 0.0);
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let p = params(23, 412_345, 90, Frequency::Biweekly, 15);
        let a = calculate(&p);
        let b = calculate(&p);
        assert_eq!(a.cost_annual.to_bits(), b.cost_annual.to_bits());
        assert_eq!(a.cost_monthly.to_bits(), b.cost_monthly.to_bits());
        assert_eq!(a.hours_annual.to_bits(), b.hours_annual.to_bits());
    }

    #[test]
    fn test_cost_is_monotonic_in_each_input() {
        let base = |a, s, d, p| calculate(&params(a, s, d, Frequency::Weekly, p)).cost_per_meeting;

        for a in 2..50 {
            assert!(base(a + 1, 100_000, 30, 5) >= base(a, 100_000, 30, 5));
        }
        for s in [20_000, 50_000, 150_000, 999_999] {
            assert!(base(5, s + 1, 30, 5) >= base(5, s, 30, 5));
        }
        for w in ALLOWED_DURATIONS.windows(2) {
            assert!(base(5, 100_000, w[1], 5) >= base(5, 100_000, w[0], 5));
        }
        for w in ALLOWED_PREP_MINUTES.windows(2) {
            assert!(base(5, 100_000, 30, w[1]) >= base(5, 100_000, 30, w[0]));
        }
    }

    #[test]
    fn test_prep_breakdown_visibility() {
        assert!(show_prep_breakdown(&params(5, 150_000, 30, Frequency::Weekly, 5)));
        assert!(!show_prep_breakdown(&params(5, 150_000, 30, Frequency::Weekly, 0)));
        assert!(!show_prep_breakdown(&params(5, 150_000, 30, Frequency::Once, 5)));
    }
}
