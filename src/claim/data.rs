//! Claim data structures supplied by the claim-processing workflow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why the claimant qualifies for the benefit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifyingReason {
    /// Qualifies through a passporting benefit (income-tested)
    QualifyingBenefit,
    /// Qualifies by being pregnant and under 18, with no income test
    Under18,
}

impl QualifyingReason {
    pub fn is_under_18(&self) -> bool {
        matches!(self, QualifyingReason::Under18)
    }
}

/// Pregnancy state of the claimant
///
/// Replaces an optional due date so the not-pregnant case is a named branch
/// rather than a null check scattered through the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PregnancyStatus {
    /// Not pregnant, or pregnancy not reported
    NotPregnant,
    /// Pregnant with the reported due date
    Pregnant { due_date: NaiveDate },
}

impl PregnancyStatus {
    /// Build from an optional due date as received from upstream
    pub fn from_due_date(due_date: Option<NaiveDate>) -> Self {
        match due_date {
            Some(due_date) => PregnancyStatus::Pregnant { due_date },
            None => PregnancyStatus::NotPregnant,
        }
    }

    /// The due date, if pregnant
    pub fn due_date(&self) -> Option<NaiveDate> {
        match self {
            PregnancyStatus::Pregnant { due_date } => Some(*due_date),
            PregnancyStatus::NotPregnant => None,
        }
    }

    pub fn is_pregnant(&self) -> bool {
        matches!(self, PregnancyStatus::Pregnant { .. })
    }
}

/// A single claim as presented for one payment cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique claim identifier
    pub claim_id: u32,

    /// Why the claimant qualifies
    pub qualifying_reason: QualifyingReason,

    /// Pregnancy state at the start of the cycle
    pub pregnancy: PregnancyStatus,

    /// Dates of birth of the claimant's children
    pub children_dobs: Vec<NaiveDate>,

    /// First day of the payment cycle being calculated
    pub cycle_start_date: NaiveDate,
}

impl Claim {
    pub fn new(
        claim_id: u32,
        qualifying_reason: QualifyingReason,
        pregnancy: PregnancyStatus,
        children_dobs: Vec<NaiveDate>,
        cycle_start_date: NaiveDate,
    ) -> Self {
        Self {
            claim_id,
            qualifying_reason,
            pregnancy,
            children_dobs,
            cycle_start_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pregnancy_status_from_due_date() {
        let due = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let pregnant = PregnancyStatus::from_due_date(Some(due));
        assert!(pregnant.is_pregnant());
        assert_eq!(pregnant.due_date(), Some(due));

        let not_pregnant = PregnancyStatus::from_due_date(None);
        assert!(!not_pregnant.is_pregnant());
        assert_eq!(not_pregnant.due_date(), None);
    }

    #[test]
    fn test_qualifying_reason_under_18() {
        assert!(QualifyingReason::Under18.is_under_18());
        assert!(!QualifyingReason::QualifyingBenefit.is_under_18());
    }
}
