//! Entitlement calculation for a single point-in-time period

use chrono::{Months, NaiveDate};

use super::types::PeriodEntitlement;
use super::window::PregnancyWindowPolicy;
use crate::claim::{PregnancyStatus, QualifyingReason};
use crate::config::VoucherRates;
use crate::error::{EntitlementError, EntitlementResult};

/// Calculates voucher entitlement as of one calculation-period date
#[derive(Debug, Clone, Copy)]
pub struct PeriodEntitlementCalculator {
    rates: VoucherRates,
    window_policy: PregnancyWindowPolicy,
}

impl PeriodEntitlementCalculator {
    pub fn new(rates: VoucherRates, window_policy: PregnancyWindowPolicy) -> Self {
        Self {
            rates,
            window_policy,
        }
    }

    /// Entitlement for one period evaluated on `on_date`
    ///
    /// Counts the claimant's children in the under-one and one-to-four age
    /// bands as of `on_date`, and adds pregnancy vouchers if `on_date`
    /// falls inside the pregnancy entitlement window.
    pub fn calculate(
        &self,
        pregnancy: PregnancyStatus,
        children_dobs: &[NaiveDate],
        on_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> EntitlementResult<PeriodEntitlement> {
        let children_under_four = children_under_age_in_years(children_dobs, on_date, 4);
        let children_under_one = children_under_age_in_years(children_dobs, on_date, 1);

        // Every child under one is also under four; anything else means the
        // counting is broken or the caller fed conflicting data
        if children_under_four < children_under_one {
            return Err(EntitlementError::ChildCountMismatch {
                under_one: children_under_one,
                under_four: children_under_four,
            });
        }
        let children_one_to_four = children_under_four - children_under_one;

        let vouchers_for_pregnancy =
            if self
                .window_policy
                .entitled_on_date(pregnancy, on_date, qualifying_reason)
            {
                self.rates.vouchers_per_pregnancy
            } else {
                0
            };

        Ok(PeriodEntitlement {
            entitlement_date: on_date,
            vouchers_for_pregnancy,
            vouchers_for_children_under_one: children_under_one
                * self.rates.vouchers_per_child_under_one,
            vouchers_for_children_one_to_four: children_one_to_four
                * self.rates.vouchers_per_child_one_to_four,
            voucher_value_in_pence: self.rates.voucher_value_in_pence,
        })
    }
}

/// Count children younger than `years` as of `on_date`
///
/// A child counts from their date of birth inclusive and stops counting on
/// the birthday that takes them out of the band. Children not yet born on
/// `on_date` never count.
fn children_under_age_in_years(children_dobs: &[NaiveDate], on_date: NaiveDate, years: u32) -> u32 {
    let earliest_qualifying_dob = on_date - Months::new(12 * years);
    children_dobs
        .iter()
        .filter(|dob| **dob > earliest_qualifying_dob && **dob <= on_date)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CycleConfig;

    fn calculator() -> PeriodEntitlementCalculator {
        let config = CycleConfig::default_programme();
        PeriodEntitlementCalculator::new(
            VoucherRates::default(),
            PregnancyWindowPolicy::from_config(&config),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_child_in_each_band() {
        // Six months and three years old on the entitlement date
        let on_date = date(2025, 1, 1);
        let dobs = vec![date(2024, 7, 1), date(2022, 1, 15)];

        let entitlement = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &dobs,
                on_date,
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        assert_eq!(entitlement.vouchers_for_pregnancy, 0);
        assert_eq!(entitlement.vouchers_for_children_under_one, 2);
        assert_eq!(entitlement.vouchers_for_children_one_to_four, 1);
        assert_eq!(entitlement.total_vouchers(), 3);
        assert_eq!(entitlement.total_value_in_pence(), 930);
    }

    #[test]
    fn test_child_moves_bands_on_first_birthday() {
        let dob = date(2024, 3, 10);
        let day_before_birthday = date(2025, 3, 9);
        let first_birthday = date(2025, 3, 10);

        let before = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[dob],
                day_before_birthday,
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();
        assert_eq!(before.vouchers_for_children_under_one, 2);
        assert_eq!(before.vouchers_for_children_one_to_four, 0);

        let after = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[dob],
                first_birthday,
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();
        assert_eq!(after.vouchers_for_children_under_one, 0);
        assert_eq!(after.vouchers_for_children_one_to_four, 1);
    }

    #[test]
    fn test_entitlement_stops_on_fourth_birthday() {
        let dob = date(2021, 3, 10);

        let before = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[dob],
                date(2025, 3, 9),
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();
        assert_eq!(before.total_vouchers(), 1);

        let after = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[dob],
                date(2025, 3, 10),
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();
        assert_eq!(after.total_vouchers(), 0);
    }

    #[test]
    fn test_unborn_child_not_counted() {
        let entitlement = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[date(2025, 2, 1)],
                date(2025, 1, 1),
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        assert_eq!(entitlement.total_vouchers(), 0);
    }

    #[test]
    fn test_child_counts_from_date_of_birth() {
        let dob = date(2025, 1, 1);
        let entitlement = calculator()
            .calculate(
                PregnancyStatus::NotPregnant,
                &[dob],
                dob,
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        assert_eq!(entitlement.vouchers_for_children_under_one, 2);
    }

    #[test]
    fn test_pregnancy_vouchers_inside_window() {
        let pregnancy = PregnancyStatus::Pregnant {
            due_date: date(2025, 4, 1),
        };

        let entitlement = calculator()
            .calculate(
                pregnancy,
                &[],
                date(2025, 1, 1),
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        assert_eq!(entitlement.vouchers_for_pregnancy, 1);
        assert_eq!(entitlement.total_vouchers(), 1);
    }

    #[test]
    fn test_no_pregnancy_vouchers_after_grace_period() {
        let pregnancy = PregnancyStatus::Pregnant {
            due_date: date(2024, 1, 1),
        };

        let entitlement = calculator()
            .calculate(
                pregnancy,
                &[],
                date(2025, 1, 1),
                QualifyingReason::QualifyingBenefit,
            )
            .unwrap();

        assert_eq!(entitlement.total_vouchers(), 0);
    }
}
