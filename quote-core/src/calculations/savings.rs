//! Time-savings (ROI) estimates for automating a repetitive task.
//!
//! ```text
//! hours_per_week      = tasks_per_week × minutes_per_task / 60      (detailed shape)
//! efficiency          = automation_efficiency × coverage            (detailed shape)
//! weekly_time_saved   = hours_per_week × efficiency
//! weekly_cost_savings = weekly_time_saved × hourly_rate
//! monthly             = weekly × 4.33
//! yearly              = weekly × 52
//! ```
//!
//! All arithmetic is exact decimal; nothing is rounded here. Use
//! [`crate::calculations::common`] to format values for display.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{TimeSavingsInput, TimeSavingsResult};

/// Calculator for [`TimeSavingsInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSavingsCalculator {
    weeks_per_month: Decimal,
    weeks_per_year: Decimal,
}

impl TimeSavingsCalculator {
    pub fn new() -> Self {
        Self {
            weeks_per_month: Decimal::new(433, 2),
            weeks_per_year: Decimal::from(52),
        }
    }

    pub fn calculate(
        &self,
        input: &TimeSavingsInput,
    ) -> TimeSavingsResult {
        let hours_per_week = self.hours_per_week(input);
        let efficiency = self.efficiency(input);

        let weekly_time_saved = hours_per_week * efficiency;
        let weekly_cost_savings = weekly_time_saved * input.hourly_rate();
        let monthly_cost_savings = weekly_cost_savings * self.weeks_per_month;
        let yearly_cost_savings = weekly_cost_savings * self.weeks_per_year;

        debug!(
            %hours_per_week,
            %efficiency,
            %weekly_cost_savings,
            "computed time savings"
        );

        TimeSavingsResult {
            weekly_time_saved,
            weekly_cost_savings,
            monthly_cost_savings,
            yearly_cost_savings,
            hours_saved: weekly_time_saved,
            roi_per_week: weekly_cost_savings,
            roi_per_year: yearly_cost_savings,
            efficiency: (efficiency * Decimal::ONE_HUNDRED).normalize(),
        }
    }

    /// Weekly hours spent on the task before automation.
    fn hours_per_week(
        &self,
        input: &TimeSavingsInput,
    ) -> Decimal {
        match input {
            TimeSavingsInput::Simple { hours_per_week, .. } => *hours_per_week,
            TimeSavingsInput::Detailed {
                tasks_per_week,
                minutes_per_task,
                ..
            } => *tasks_per_week * *minutes_per_task / Decimal::from(60),
        }
    }

    /// Effective fraction of that time the automation removes.
    /// The simple shape has no coverage term.
    fn efficiency(
        &self,
        input: &TimeSavingsInput,
    ) -> Decimal {
        match input {
            TimeSavingsInput::Simple {
                automation_efficiency,
                ..
            } => *automation_efficiency,
            TimeSavingsInput::Detailed {
                coverage,
                automation_efficiency,
                ..
            } => *automation_efficiency * *coverage,
        }
    }
}

impl Default for TimeSavingsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the calculator with standard calendar factors.
pub fn compute_savings(input: &TimeSavingsInput) -> TimeSavingsResult {
    TimeSavingsCalculator::new().calculate(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // simple shape tests
    // =========================================================================

    #[test]
    fn simple_shape_ten_hours_at_fifty() {
        let input = TimeSavingsInput::from_simple(dec!(10), dec!(50), Some(dec!(0.8)));

        let result = compute_savings(&input);

        assert_eq!(result.weekly_time_saved, dec!(8));
        assert_eq!(result.weekly_cost_savings, dec!(400));
        assert_eq!(result.monthly_cost_savings, dec!(1732));
        assert_eq!(result.yearly_cost_savings, dec!(20800));
        assert_eq!(result.efficiency, dec!(80));
    }

    #[test]
    fn simple_shape_default_efficiency_matches_explicit() {
        let defaulted = compute_savings(&TimeSavingsInput::from_simple(dec!(10), dec!(50), None));
        let explicit =
            compute_savings(&TimeSavingsInput::from_simple(dec!(10), dec!(50), Some(dec!(0.8))));

        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn weekly_cost_is_hours_times_efficiency_times_rate() {
        let cases = [
            (dec!(0), dec!(50), dec!(0.8)),
            (dec!(3.5), dec!(42.25), dec!(0.6)),
            (dec!(40), dec!(120), dec!(1)),
            (dec!(12), dec!(0), dec!(0.5)),
        ];

        for (hours, rate, efficiency) in cases {
            let result =
                compute_savings(&TimeSavingsInput::from_simple(hours, rate, Some(efficiency)));

            assert_eq!(result.weekly_cost_savings, hours * efficiency * rate);
            assert_eq!(result.yearly_cost_savings, result.weekly_cost_savings * dec!(52));
        }
    }

    // =========================================================================
    // detailed shape tests
    // =========================================================================

    #[test]
    fn detailed_shape_with_defaults() {
        let input = TimeSavingsInput::from_detailed(dec!(5), dec!(15), dec!(50), None, None);

        let result = compute_savings(&input);

        assert_eq!(result.efficiency, dec!(72));
        assert_eq!(result.weekly_time_saved, dec!(0.9));
        assert_eq!(result.weekly_cost_savings, dec!(45));
        assert_eq!(result.yearly_cost_savings, dec!(2340));
    }

    #[test]
    fn detailed_shape_derives_hours_from_tasks() {
        let calculator = TimeSavingsCalculator::new();
        let input = TimeSavingsInput::from_detailed(dec!(5), dec!(15), dec!(50), None, None);

        assert_eq!(calculator.hours_per_week(&input), dec!(1.25));
    }

    #[test]
    fn detailed_shape_full_coverage_matches_simple_shape() {
        let detailed = compute_savings(&TimeSavingsInput::from_detailed(
            dec!(6),
            dec!(30),
            dec!(40),
            Some(dec!(1)),
            Some(dec!(0.8)),
        ));
        let simple = compute_savings(&TimeSavingsInput::from_simple(dec!(3), dec!(40), Some(dec!(0.8))));

        assert_eq!(detailed.weekly_cost_savings, simple.weekly_cost_savings);
        assert_eq!(detailed.yearly_cost_savings, simple.yearly_cost_savings);
    }

    // =========================================================================
    // alias tests
    // =========================================================================

    #[test]
    fn aliases_repeat_primary_fields() {
        let result =
            compute_savings(&TimeSavingsInput::from_detailed(dec!(10), dec!(8), dec!(50), None, None));

        assert_eq!(result.hours_saved, result.weekly_time_saved);
        assert_eq!(result.roi_per_week, result.weekly_cost_savings);
        assert_eq!(result.roi_per_year, result.yearly_cost_savings);
    }

    #[test]
    fn negative_inputs_are_computed_not_rejected() {
        let result = compute_savings(&TimeSavingsInput::from_simple(dec!(10), dec!(-50), None));

        assert_eq!(result.weekly_cost_savings, dec!(-400));
    }
}
