//! Entitlement calculation engine
//!
//! Pure, stateless calculators over claim dates and immutable
//! configuration. The cycle calculator is the entry point for the payment
//! workflow; the mid-cycle calculator serves the pregnancy-update workflow.

mod backdate;
mod cycle;
mod midcycle;
mod period;
mod types;
mod window;

pub use backdate::BackdatedCorrectionCalculator;
pub use cycle::CycleEntitlementCalculator;
pub use midcycle::MidCycleAdditionalVoucherCalculator;
pub use period::PeriodEntitlementCalculator;
pub use types::{CycleEntitlement, PeriodEntitlement};
pub use window::PregnancyWindowPolicy;
