//! Entitlement result types for periods and cycles

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EntitlementError, EntitlementResult};

/// Voucher entitlement for one calculation period
///
/// Counts are kept per category and the face value is carried rather than
/// pre-multiplied, so monetary totals are derived exactly in integer pence
/// wherever they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntitlement {
    /// Date the period was evaluated for
    pub entitlement_date: NaiveDate,

    /// Vouchers for a pregnancy inside its entitlement window
    pub vouchers_for_pregnancy: u32,

    /// Vouchers for children under one year old
    pub vouchers_for_children_under_one: u32,

    /// Vouchers for children between one and four years old
    pub vouchers_for_children_one_to_four: u32,

    /// Face value of a single voucher in pence
    pub voucher_value_in_pence: u32,
}

impl PeriodEntitlement {
    /// Total vouchers across all categories for this period
    pub fn total_vouchers(&self) -> u32 {
        self.vouchers_for_pregnancy
            + self.vouchers_for_children_under_one
            + self.vouchers_for_children_one_to_four
    }

    /// Total monetary value of this period in pence
    pub fn total_value_in_pence(&self) -> u64 {
        u64::from(self.total_vouchers()) * u64::from(self.voucher_value_in_pence)
    }
}

/// Voucher entitlement for one whole payment cycle
///
/// Category counts are summed independently across the cycle's periods, so
/// subtotals always reconcile with the grand total. Back-dated vouchers are
/// a separate additive count attached by the cycle calculator; they never
/// rewrite historical cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEntitlement {
    /// Per-period entitlements, in cycle order
    pub period_entitlements: Vec<PeriodEntitlement>,

    /// Pregnancy vouchers summed across the cycle
    pub vouchers_for_pregnancy: u32,

    /// Under-one vouchers summed across the cycle
    pub vouchers_for_children_under_one: u32,

    /// One-to-four vouchers summed across the cycle
    pub vouchers_for_children_one_to_four: u32,

    /// Corrective vouchers owed retroactively for a newly matched birth
    pub backdated_vouchers: u32,

    /// Face value of a single voucher in pence, shared by every period
    pub voucher_value_in_pence: u32,
}

impl CycleEntitlement {
    /// Aggregate period entitlements with no back-dated correction
    pub fn from_periods(periods: Vec<PeriodEntitlement>) -> EntitlementResult<Self> {
        Self::from_periods_with_backdated(periods, 0)
    }

    /// Aggregate period entitlements and attach a back-dated voucher count
    ///
    /// Fails on an empty period sequence, or if the periods disagree on the
    /// voucher face value.
    pub fn from_periods_with_backdated(
        periods: Vec<PeriodEntitlement>,
        backdated_vouchers: u32,
    ) -> EntitlementResult<Self> {
        let first = periods.first().ok_or(EntitlementError::EmptyCycle)?;
        let voucher_value_in_pence = first.voucher_value_in_pence;

        for period in &periods {
            if period.voucher_value_in_pence != voucher_value_in_pence {
                return Err(EntitlementError::FaceValueMismatch {
                    expected: voucher_value_in_pence,
                    found: period.voucher_value_in_pence,
                });
            }
        }

        Ok(Self {
            vouchers_for_pregnancy: periods.iter().map(|p| p.vouchers_for_pregnancy).sum(),
            vouchers_for_children_under_one: periods
                .iter()
                .map(|p| p.vouchers_for_children_under_one)
                .sum(),
            vouchers_for_children_one_to_four: periods
                .iter()
                .map(|p| p.vouchers_for_children_one_to_four)
                .sum(),
            backdated_vouchers,
            voucher_value_in_pence,
            period_entitlements: periods,
        })
    }

    /// Total vouchers for the cycle, back-dated correction included
    pub fn total_vouchers(&self) -> u32 {
        self.vouchers_for_pregnancy
            + self.vouchers_for_children_under_one
            + self.vouchers_for_children_one_to_four
            + self.backdated_vouchers
    }

    /// Total monetary value of the cycle in pence
    pub fn total_value_in_pence(&self) -> u64 {
        u64::from(self.total_vouchers()) * u64::from(self.voucher_value_in_pence)
    }
}
