//! Entitlement System - calculation engine for recurring nutrition voucher benefits
//!
//! This library provides:
//! - Per-period and per-cycle voucher entitlement calculation
//! - Pregnancy entitlement windows with under-18 grace handling
//! - Back-dated correction when a tracked pregnancy resolves into a birth
//! - Mid-cycle top-ups for newly declared pregnancies
//! - Batch claim loading and a pre-configured runner facade

pub mod claim;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use claim::{Claim, PregnancyStatus, QualifyingReason};
pub use config::{CycleConfig, EngineSettings, VoucherRates};
pub use entitlement::{
    CycleEntitlement, CycleEntitlementCalculator, MidCycleAdditionalVoucherCalculator,
    PeriodEntitlement,
};
pub use error::{ConfigError, EntitlementError, EntitlementResult};
pub use runner::EntitlementRunner;
