//! Payment cycle geometry and entitlement window widths

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::ConfigError;

/// Validated payment cycle configuration
///
/// Fixes the shape of every payment cycle: how long a cycle runs, how many
/// equal calculation periods it is divided into, the matching window used to
/// pair a reported birth with a tracked due date, and the grace periods
/// during which pregnancy vouchers continue after a due date has passed.
///
/// Immutable once constructed; invalid combinations fail construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleConfig {
    /// Length of one payment cycle in days
    cycle_duration_days: u32,

    /// Number of calculation periods per cycle
    number_of_calculation_periods: u32,

    /// Derived: length of one calculation period in days
    calculation_period_duration_days: u32,

    /// Matching window: weeks before the due date a birth can fall
    weeks_before_due_date: u32,

    /// Matching window: weeks after the due date a birth can fall
    weeks_after_due_date: u32,

    /// Weeks after the due date that pregnancy vouchers continue
    pregnancy_grace_period_weeks: u32,

    /// Grace period applied when the claimant qualifies by being under 18
    under_18_pregnancy_grace_period_weeks: u32,
}

impl CycleConfig {
    /// Construct a validated configuration
    ///
    /// Fails if the cycle duration or period count is zero, or if the
    /// periods do not tile the cycle exactly.
    pub fn new(
        cycle_duration_days: u32,
        number_of_calculation_periods: u32,
        weeks_before_due_date: u32,
        weeks_after_due_date: u32,
        pregnancy_grace_period_weeks: u32,
        under_18_pregnancy_grace_period_weeks: u32,
    ) -> Result<Self, ConfigError> {
        if cycle_duration_days == 0 {
            return Err(ConfigError::ZeroCycleDuration);
        }
        if number_of_calculation_periods == 0 {
            return Err(ConfigError::ZeroPeriodCount);
        }
        if cycle_duration_days % number_of_calculation_periods != 0 {
            return Err(ConfigError::IndivisibleCycleDuration {
                duration: cycle_duration_days,
                periods: number_of_calculation_periods,
            });
        }

        Ok(Self {
            cycle_duration_days,
            number_of_calculation_periods,
            calculation_period_duration_days: cycle_duration_days / number_of_calculation_periods,
            weeks_before_due_date,
            weeks_after_due_date,
            pregnancy_grace_period_weeks,
            under_18_pregnancy_grace_period_weeks,
        })
    }

    /// Standard programme configuration: 28-day cycles of four weekly
    /// periods, a 16-week-before / 8-week-after birth matching window,
    /// and 12 / 16 week grace periods
    pub fn default_programme() -> Self {
        Self::new(28, 4, 16, 8, 12, 16).expect("default programme configuration is valid")
    }

    /// Length of one payment cycle in days
    pub fn cycle_duration_days(&self) -> u32 {
        self.cycle_duration_days
    }

    /// Number of calculation periods per cycle
    pub fn number_of_calculation_periods(&self) -> u32 {
        self.number_of_calculation_periods
    }

    /// Length of one calculation period in days
    pub fn calculation_period_duration_days(&self) -> u32 {
        self.calculation_period_duration_days
    }

    /// Weeks before the due date within which a birth matches the pregnancy
    pub fn weeks_before_due_date(&self) -> u32 {
        self.weeks_before_due_date
    }

    /// Weeks after the due date within which a birth matches the pregnancy
    pub fn weeks_after_due_date(&self) -> u32 {
        self.weeks_after_due_date
    }

    /// Weeks after the due date that pregnancy vouchers continue
    pub fn pregnancy_grace_period_weeks(&self) -> u32 {
        self.pregnancy_grace_period_weeks
    }

    /// Grace period for claimants qualifying by being under 18
    pub fn under_18_pregnancy_grace_period_weeks(&self) -> u32 {
        self.under_18_pregnancy_grace_period_weeks
    }

    /// One calculation period as a `chrono::Duration`
    pub fn calculation_period_duration(&self) -> Duration {
        Duration::days(i64::from(self.calculation_period_duration_days))
    }

    /// The dates at which entitlement is evaluated for a cycle starting on
    /// `cycle_start_date`: one date per calculation period, the first on the
    /// cycle start itself
    pub fn period_dates(&self, cycle_start_date: NaiveDate) -> Vec<NaiveDate> {
        (0..self.number_of_calculation_periods)
            .map(|i| {
                cycle_start_date
                    + Duration::days(i64::from(i * self.calculation_period_duration_days))
            })
            .collect()
    }

    /// First day after the cycle starting on `cycle_start_date`
    pub fn cycle_end_date(&self, cycle_start_date: NaiveDate) -> NaiveDate {
        cycle_start_date + Duration::days(i64::from(self.cycle_duration_days))
    }
}
