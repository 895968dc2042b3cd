//! Error types for the entitlement engine

use thiserror::Error;

/// Result type for entitlement calculations
pub type EntitlementResult<T> = Result<T, EntitlementError>;

/// Errors raised while calculating entitlement for a claim
///
/// These indicate a defect in the inputs or configuration, not an ordinary
/// outcome: an absent due date, an empty children list, or zero matched
/// births are all valid branches that produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntitlementError {
    /// Invalid cycle configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// More children under one than under four: the upstream eligibility
    /// feed has supplied conflicting data for this claim
    #[error("children under one ({under_one}) exceed children under four ({under_four})")]
    ChildCountMismatch { under_one: u32, under_four: u32 },

    /// A cycle entitlement was built from zero calculation periods
    #[error("a payment cycle must contain at least one calculation period")]
    EmptyCycle,

    /// Constituent periods of one cycle carried different voucher face values
    #[error("mismatched voucher face values within one cycle: {expected}p vs {found}p")]
    FaceValueMismatch { expected: u32, found: u32 },
}

/// Errors raised while constructing a [`crate::config::CycleConfig`]
///
/// Construction fails outright; there is no partial or degraded mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Cycle duration must be at least one day
    #[error("cycle duration must be greater than zero days")]
    ZeroCycleDuration,

    /// A cycle must contain at least one calculation period
    #[error("number of calculation periods must be greater than zero")]
    ZeroPeriodCount,

    /// Periods must tile the cycle exactly
    #[error("cycle duration of {duration} days is not divisible by {periods} calculation periods")]
    IndivisibleCycleDuration { duration: u32, periods: u32 },
}
