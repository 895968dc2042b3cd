//! Cycle-level entitlement orchestration

use chrono::NaiveDate;
use log::debug;

use super::backdate::BackdatedCorrectionCalculator;
use super::period::PeriodEntitlementCalculator;
use super::types::{CycleEntitlement, PeriodEntitlement};
use super::window::PregnancyWindowPolicy;
use crate::claim::{PregnancyStatus, QualifyingReason};
use crate::config::EngineSettings;
use crate::error::EntitlementResult;

/// Calculates the full voucher entitlement for one payment cycle
///
/// Evaluates entitlement at each of the cycle's calculation-period dates,
/// detects a pregnancy resolving into a birth by comparing against the
/// previous cycle's result, and attaches any back-dated correction.
#[derive(Debug, Clone, Copy)]
pub struct CycleEntitlementCalculator {
    settings: EngineSettings,
    window_policy: PregnancyWindowPolicy,
    period_calculator: PeriodEntitlementCalculator,
    backdate_calculator: BackdatedCorrectionCalculator,
}

impl CycleEntitlementCalculator {
    pub fn new(settings: EngineSettings) -> Self {
        let window_policy = PregnancyWindowPolicy::from_config(&settings.cycle);
        let period_calculator = PeriodEntitlementCalculator::new(settings.rates, window_policy);
        let backdate_calculator =
            BackdatedCorrectionCalculator::new(settings.cycle, period_calculator);

        Self {
            settings,
            window_policy,
            period_calculator,
            backdate_calculator,
        }
    }

    /// Entitlement for the cycle starting on `cycle_start_date`
    ///
    /// `previous_entitlement` is the result computed for the claimant's
    /// previous cycle, if any; it is only read to detect the transition
    /// from pregnancy vouchers to child vouchers.
    pub fn calculate(
        &self,
        pregnancy: PregnancyStatus,
        children_dobs: &[NaiveDate],
        cycle_start_date: NaiveDate,
        previous_entitlement: Option<&CycleEntitlement>,
        qualifying_reason: QualifyingReason,
    ) -> EntitlementResult<CycleEntitlement> {
        let due_date = match (pregnancy.due_date(), previous_entitlement) {
            // Nothing to reconcile unless a pregnancy was being paid for
            (Some(due_date), Some(previous)) if previous.vouchers_for_pregnancy > 0 => due_date,
            _ => {
                return self.calculate_without_backdating(
                    pregnancy,
                    children_dobs,
                    cycle_start_date,
                    qualifying_reason,
                );
            }
        };

        let matched_dobs: Vec<NaiveDate> = children_dobs
            .iter()
            .copied()
            .filter(|dob| self.window_policy.is_matched_birth(due_date, *dob))
            .collect();

        if matched_dobs.is_empty() {
            return self.calculate_without_backdating(
                pregnancy,
                children_dobs,
                cycle_start_date,
                qualifying_reason,
            );
        }

        // The pregnancy has resolved into a birth: pregnancy vouchers stop,
        // the child earns child vouchers, and the periods already paid as
        // pregnancy periods are corrected retroactively
        debug!(
            "pregnancy due {} matched {} birth(s); back-dating from cycle start {}",
            due_date,
            matched_dobs.len(),
            cycle_start_date
        );

        let periods = self.calculate_periods(
            PregnancyStatus::NotPregnant,
            children_dobs,
            cycle_start_date,
            qualifying_reason,
        )?;
        let backdated_vouchers = self.backdate_calculator.calculate(
            due_date,
            &matched_dobs,
            cycle_start_date,
            qualifying_reason,
        )?;

        CycleEntitlement::from_periods_with_backdated(periods, backdated_vouchers)
    }

    fn calculate_without_backdating(
        &self,
        pregnancy: PregnancyStatus,
        children_dobs: &[NaiveDate],
        cycle_start_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> EntitlementResult<CycleEntitlement> {
        let periods = self.calculate_periods(
            pregnancy,
            children_dobs,
            cycle_start_date,
            qualifying_reason,
        )?;
        CycleEntitlement::from_periods(periods)
    }

    fn calculate_periods(
        &self,
        pregnancy: PregnancyStatus,
        children_dobs: &[NaiveDate],
        cycle_start_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> EntitlementResult<Vec<PeriodEntitlement>> {
        self.settings
            .cycle
            .period_dates(cycle_start_date)
            .into_iter()
            .map(|date| {
                self.period_calculator
                    .calculate(pregnancy, children_dobs, date, qualifying_reason)
            })
            .collect()
    }
}
