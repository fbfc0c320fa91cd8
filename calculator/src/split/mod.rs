// Bill split arithmetic
use crate::config::settings::CalculatorSettings;
use shared::models::{BillState, Breakdown, MAX_TIP_PERCENTAGE};

/// Turns the three form inputs into a grand total and a per-person share.
///
/// Inputs are expected to be range-checked already (see `crate::input`);
/// nothing here can fail and nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitCalculator {
    party_size_offset: u32,
}

impl SplitCalculator {
    pub fn new(settings: &CalculatorSettings) -> Self {
        Self::with_party_size_offset(settings.party_size_offset)
    }

    pub fn with_party_size_offset(party_size_offset: u32) -> Self {
        Self { party_size_offset }
    }

    pub fn party_size_offset(&self) -> u32 {
        self.party_size_offset
    }

    pub fn compute_tip_value(&self, check_amount: f64, tip_percentage: u32) -> f64 {
        debug_assert!(check_amount >= 0.0, "check amount must be non-negative");
        debug_assert!(tip_percentage <= MAX_TIP_PERCENTAGE, "tip percentage above 100");
        check_amount * f64::from(tip_percentage) / 100.0
    }

    pub fn compute_grand_total(&self, check_amount: f64, tip_percentage: u32) -> f64 {
        check_amount + self.compute_tip_value(check_amount, tip_percentage)
    }

    pub fn compute_per_person(&self, check_amount: f64, tip_percentage: u32, party_size: u32) -> f64 {
        debug_assert!(party_size >= 1, "party size must be at least 1");
        // in f64 so no party size and offset combination can overflow
        let divisor = f64::from(party_size) + f64::from(self.party_size_offset);
        self.compute_grand_total(check_amount, tip_percentage) / divisor
    }

    pub fn breakdown(&self, state: &BillState) -> Breakdown {
        Breakdown {
            tip_value: self.compute_tip_value(state.check_amount, state.tip_percentage),
            grand_total: self.compute_grand_total(state.check_amount, state.tip_percentage),
            per_person: self.compute_per_person(
                state.check_amount,
                state.tip_percentage,
                state.party_size,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{} != {}",
            actual,
            expected
        );
    }

    const AMOUNTS: [f64; 6] = [0.0, 0.01, 1.0, 37.5, 100.0, 12_345.67];

    #[test]
    fn test_example_scenarios() {
        let calc = SplitCalculator::default();
        // (amount, tip, party, grand total, per person)
        let cases = [
            (100.0, 20, 4, 120.0, 30.0),
            (50.0, 0, 2, 50.0, 25.0),
            (0.0, 25, 5, 0.0, 0.0),
            (37.5, 15, 3, 43.125, 14.375),
        ];
        for (amount, tip, party, total, each) in cases {
            assert_close(calc.compute_grand_total(amount, tip), total);
            assert_close(calc.compute_per_person(amount, tip, party), each);
        }
    }

    #[test]
    fn test_tip_value() {
        let calc = SplitCalculator::default();
        assert_close(calc.compute_tip_value(37.5, 15), 5.625);
        assert_close(calc.compute_tip_value(80.0, 100), 80.0);
    }

    #[test]
    fn test_grand_total_never_below_amount() {
        let calc = SplitCalculator::default();
        for amount in AMOUNTS {
            for tip in 0..=100 {
                assert!(calc.compute_grand_total(amount, tip) >= amount);
            }
        }
    }

    #[test]
    fn test_zero_tip_is_noop() {
        let calc = SplitCalculator::default();
        for amount in AMOUNTS {
            assert_eq!(calc.compute_grand_total(amount, 0), amount);
        }
    }

    #[test]
    fn test_per_person_non_increasing_with_party_size() {
        let calc = SplitCalculator::default();
        for amount in AMOUNTS {
            let mut previous = f64::INFINITY;
            for party in 1..=99 {
                let each = calc.compute_per_person(amount, 20, party);
                assert!(each <= previous, "party {} raised the share", party);
                previous = each;
            }
        }
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let calc = SplitCalculator::default();
        let state = BillState::new(37.5, 3, 15);
        assert_eq!(calc.breakdown(&state), calc.breakdown(&state));
    }

    #[test]
    fn test_breakdown_matches_individual_operations() {
        let calc = SplitCalculator::default();
        let breakdown = calc.breakdown(&BillState::new(100.0, 4, 20));
        assert_close(breakdown.tip_value, 20.0);
        assert_close(breakdown.grand_total, 120.0);
        assert_close(breakdown.per_person, 30.0);
    }

    #[test]
    fn test_party_size_offset_of_two_divides_by_four_for_two_people() {
        let calc = SplitCalculator::with_party_size_offset(2);
        // 120 split over "2 people" divides by 4
        assert_close(calc.compute_per_person(100.0, 20, 2), 30.0);
        // the grand total is unaffected
        assert_close(calc.compute_grand_total(100.0, 20), 120.0);
    }

    #[test]
    fn test_huge_party_size_offset_does_not_overflow() {
        let calc = SplitCalculator::with_party_size_offset(u32::MAX);
        let each = calc.compute_per_person(100.0, 20, 2);
        assert!(each.is_finite() && each > 0.0);
    }

    #[test]
    fn test_new_reads_offset_from_settings() {
        let settings = CalculatorSettings {
            party_size_offset: 2,
            ..Default::default()
        };
        assert_eq!(SplitCalculator::new(&settings).party_size_offset(), 2);
        assert_eq!(SplitCalculator::new(&CalculatorSettings::default()).party_size_offset(), 0);
    }
}
