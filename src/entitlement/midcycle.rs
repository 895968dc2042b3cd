//! Additional vouchers for a pregnancy declared partway through a cycle

use chrono::NaiveDate;

use super::window::PregnancyWindowPolicy;
use crate::claim::{PregnancyStatus, QualifyingReason};
use crate::config::{CycleConfig, VoucherRates};

/// Tops up the current cycle when a claimant reports a new pregnancy
/// mid-cycle
///
/// Only the whole calculation periods remaining in the cycle are paid; the
/// period already underway is left alone (back-dating settles it once the
/// birth is confirmed).
#[derive(Debug, Clone, Copy)]
pub struct MidCycleAdditionalVoucherCalculator {
    config: CycleConfig,
    rates: VoucherRates,
    window_policy: PregnancyWindowPolicy,
}

impl MidCycleAdditionalVoucherCalculator {
    pub fn new(config: CycleConfig, rates: VoucherRates) -> Self {
        let window_policy = PregnancyWindowPolicy::from_config(&config);
        Self {
            config,
            rates,
            window_policy,
        }
    }

    /// Additional pregnancy vouchers owed for the rest of the current cycle
    ///
    /// An update on or before the cycle start needs no top-up: the normal
    /// cycle calculation already covers the pregnancy.
    pub fn calculate(
        &self,
        due_date: NaiveDate,
        cycle_start_date: NaiveDate,
        cycle_end_date: NaiveDate,
        claim_update_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> u32 {
        if claim_update_date <= cycle_start_date {
            return 0;
        }

        let pregnancy = PregnancyStatus::Pregnant { due_date };
        let step = self.config.calculation_period_duration();

        // First period boundary on or after the update
        let mut boundary = cycle_start_date;
        while boundary < claim_update_date {
            boundary += step;
        }

        let mut vouchers = 0;
        while boundary < cycle_end_date {
            if self
                .window_policy
                .entitled_on_date(pregnancy, boundary, qualifying_reason)
            {
                vouchers += self.rates.vouchers_per_pregnancy;
            }
            boundary += step;
        }

        vouchers
    }
}
