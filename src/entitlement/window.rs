//! Pregnancy entitlement and birth-matching date windows

use chrono::{Duration, NaiveDate};

use crate::claim::{PregnancyStatus, QualifyingReason};
use crate::config::CycleConfig;

/// Date-window predicates for pregnancy entitlement
///
/// A pregnancy earns vouchers up to a grace period after its due date
/// (under-18 claimants get their own grace width), and a reported birth is
/// treated as the tracked pregnancy when it falls inside the matching
/// window around the due date.
#[derive(Debug, Clone, Copy)]
pub struct PregnancyWindowPolicy {
    weeks_before_due_date: u32,
    weeks_after_due_date: u32,
    pregnancy_grace_period_weeks: u32,
    under_18_pregnancy_grace_period_weeks: u32,
}

impl PregnancyWindowPolicy {
    /// Build the policy from cycle configuration
    pub fn from_config(config: &CycleConfig) -> Self {
        Self {
            weeks_before_due_date: config.weeks_before_due_date(),
            weeks_after_due_date: config.weeks_after_due_date(),
            pregnancy_grace_period_weeks: config.pregnancy_grace_period_weeks(),
            under_18_pregnancy_grace_period_weeks: config.under_18_pregnancy_grace_period_weeks(),
        }
    }

    /// Whether a pregnancy earns vouchers on `on_date`
    ///
    /// There is no lower bound: any date up to the end of the grace period
    /// is entitled, however far before the due date it falls.
    pub fn entitled_on_date(
        &self,
        pregnancy: PregnancyStatus,
        on_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> bool {
        match pregnancy {
            PregnancyStatus::NotPregnant => false,
            PregnancyStatus::Pregnant { due_date } => {
                on_date <= self.grace_period_end(due_date, qualifying_reason)
            }
        }
    }

    /// Last entitled date for a pregnancy with the given due date
    pub fn grace_period_end(
        &self,
        due_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> NaiveDate {
        let grace_weeks = if qualifying_reason.is_under_18() {
            self.under_18_pregnancy_grace_period_weeks
        } else {
            self.pregnancy_grace_period_weeks
        };
        due_date + Duration::weeks(i64::from(grace_weeks))
    }

    /// Whether a reported birth is the child of the tracked pregnancy
    ///
    /// True iff the date of birth falls inside
    /// `[due_date - weeks_before, due_date + weeks_after]`, both ends
    /// inclusive. A birth outside the window is an unrelated,
    /// independently-reported child.
    pub fn is_matched_birth(&self, due_date: NaiveDate, date_of_birth: NaiveDate) -> bool {
        let earliest = due_date - Duration::weeks(i64::from(self.weeks_before_due_date));
        let latest = due_date + Duration::weeks(i64::from(self.weeks_after_due_date));
        date_of_birth >= earliest && date_of_birth <= latest
    }
}
