//! Back-dated voucher correction when a tracked pregnancy resolves into a birth

use chrono::NaiveDate;
use log::debug;

use super::period::PeriodEntitlementCalculator;
use crate::claim::{PregnancyStatus, QualifyingReason};
use crate::config::CycleConfig;
use crate::error::EntitlementResult;

/// Computes the net additional vouchers owed for calculation periods that
/// have already been paid as pregnancy periods but should have been paid as
/// child periods
///
/// The correction is floored at zero: if the pregnancy vouchers already
/// paid exceed what the child would have earned, nothing is clawed back.
#[derive(Debug, Clone, Copy)]
pub struct BackdatedCorrectionCalculator {
    config: CycleConfig,
    period_calculator: PeriodEntitlementCalculator,
}

impl BackdatedCorrectionCalculator {
    pub fn new(config: CycleConfig, period_calculator: PeriodEntitlementCalculator) -> Self {
        Self {
            config,
            period_calculator,
        }
    }

    /// Net back-dated vouchers for children newly matched to a pregnancy
    ///
    /// Walks backward over calculation-period boundaries from the cycle
    /// start, collecting every boundary on or after the earliest new date
    /// of birth, and reconciles what should have been paid for the children
    /// against what was already paid for the pregnancy over those periods.
    pub fn calculate(
        &self,
        due_date: NaiveDate,
        new_children_dobs: &[NaiveDate],
        cycle_start_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> EntitlementResult<u32> {
        let Some(&earliest_dob) = new_children_dobs.iter().min() else {
            return Ok(0);
        };

        let dates = self.boundaries_since(earliest_dob, cycle_start_date);
        debug!(
            "back-dating {} periods for birth on {} (due {})",
            dates.len(),
            earliest_dob,
            due_date
        );

        let mut vouchers_for_children = 0u32;
        let mut vouchers_paid_for_pregnancy = 0u32;
        let pregnancy = PregnancyStatus::Pregnant { due_date };

        for date in dates {
            vouchers_for_children += self
                .period_calculator
                .calculate(
                    PregnancyStatus::NotPregnant,
                    new_children_dobs,
                    date,
                    qualifying_reason,
                )?
                .total_vouchers();

            vouchers_paid_for_pregnancy += self
                .period_calculator
                .calculate(pregnancy, &[], date, qualifying_reason)?
                .total_vouchers();
        }

        Ok(vouchers_for_children.saturating_sub(vouchers_paid_for_pregnancy))
    }

    /// Historical period boundaries on or after `earliest_dob`, stepping
    /// back one period at a time from the cycle start (exclusive)
    fn boundaries_since(
        &self,
        earliest_dob: NaiveDate,
        cycle_start_date: NaiveDate,
    ) -> Vec<NaiveDate> {
        let step = self.config.calculation_period_duration();
        let mut dates = Vec::new();
        let mut date = cycle_start_date - step;

        while date >= earliest_dob {
            dates.push(date);
            date -= step;
        }

        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::window::PregnancyWindowPolicy;
    use crate::config::VoucherRates;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator(config: CycleConfig, rates: VoucherRates) -> BackdatedCorrectionCalculator {
        let period_calculator =
            PeriodEntitlementCalculator::new(rates, PregnancyWindowPolicy::from_config(&config));
        BackdatedCorrectionCalculator::new(config, period_calculator)
    }

    #[test]
    fn test_child_vouchers_minus_pregnancy_vouchers() {
        // Two-day periods; child born seven days before the cycle start, so
        // three historical boundaries fall on or after the birth
        let config = CycleConfig::new(8, 4, 16, 8, 12, 16).unwrap();
        let calc = calculator(config, VoucherRates::default());

        let cycle_start = date(2025, 3, 1);
        let dob = cycle_start - Duration::days(7);

        let backdated = calc
            .calculate(dob, &[dob], cycle_start, QualifyingReason::QualifyingBenefit)
            .unwrap();

        // Child earns 2 per period, pregnancy already paid 1 per period
        assert_eq!(backdated, (2 * 3) - (1 * 3));
    }

    #[test]
    fn test_no_clawback_when_pregnancy_paid_more() {
        let config = CycleConfig::new(8, 4, 16, 8, 12, 16).unwrap();
        let rates = VoucherRates {
            vouchers_per_pregnancy: 2,
            vouchers_per_child_under_one: 1,
            vouchers_per_child_one_to_four: 1,
            voucher_value_in_pence: 310,
        };
        let calc = calculator(config, rates);

        let cycle_start = date(2025, 3, 1);
        let dob = cycle_start - Duration::days(7);

        let backdated = calc
            .calculate(dob, &[dob], cycle_start, QualifyingReason::QualifyingBenefit)
            .unwrap();

        assert_eq!(backdated, 0);
    }

    #[test]
    fn test_boundary_on_date_of_birth_included() {
        let config = CycleConfig::new(8, 4, 16, 8, 12, 16).unwrap();
        let calc = calculator(config, VoucherRates::default());

        let cycle_start = date(2025, 3, 1);
        // Birth exactly on a period boundary: boundaries at -2, -4, -6 days,
        // dob at -6 days, so all three count
        let dob = cycle_start - Duration::days(6);

        let backdated = calc
            .calculate(dob, &[dob], cycle_start, QualifyingReason::QualifyingBenefit)
            .unwrap();

        assert_eq!(backdated, (2 * 3) - (1 * 3));
    }

    #[test]
    fn test_birth_inside_first_period_yields_nothing() {
        let config = CycleConfig::default_programme();
        let calc = calculator(config, VoucherRates::default());

        let cycle_start = date(2025, 3, 1);
        // Born after the most recent historical boundary
        let dob = cycle_start - Duration::days(3);

        let backdated = calc
            .calculate(dob, &[dob], cycle_start, QualifyingReason::QualifyingBenefit)
            .unwrap();

        assert_eq!(backdated, 0);
    }

    #[test]
    fn test_never_negative_across_rate_mixes() {
        let config = CycleConfig::new(28, 14, 16, 8, 12, 16).unwrap();
        let rates = VoucherRates {
            vouchers_per_pregnancy: 5,
            vouchers_per_child_under_one: 0,
            vouchers_per_child_one_to_four: 0,
            voucher_value_in_pence: 310,
        };
        let calc = calculator(config, rates);

        let cycle_start = date(2025, 3, 1);
        let dob = cycle_start - Duration::days(20);

        let backdated = calc
            .calculate(dob, &[dob], cycle_start, QualifyingReason::QualifyingBenefit)
            .unwrap();

        assert_eq!(backdated, 0);
    }

    #[test]
    fn test_twins_walk_from_earliest_birth() {
        let config = CycleConfig::new(8, 4, 16, 8, 12, 16).unwrap();
        let calc = calculator(config, VoucherRates::default());

        let cycle_start = date(2025, 3, 1);
        let first = cycle_start - Duration::days(7);
        let second = cycle_start - Duration::days(5);

        let backdated = calc
            .calculate(
                first,
                &[second, first],
                cycle_start,
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        // Boundaries at -2, -4, -6. First twin earns 2 on each; the second
        // is unborn at -6 and earns 2 on the later two only. Pregnancy paid
        // 1 on each boundary.
        assert_eq!(backdated, (2 * 3 + 2 * 2) - (1 * 3));
    }
}
