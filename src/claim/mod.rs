//! Claim data structures and batch loading

mod data;
pub mod loader;

pub use data::{Claim, PregnancyStatus, QualifyingReason};
pub use loader::{load_claims, load_default_claims};
