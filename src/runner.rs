//! Runner facade for calculating many claims against one configuration
//!
//! Builds the calculators once from loaded settings, then lets callers run
//! claim after claim without re-reading configuration.

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;

use crate::claim::{Claim, QualifyingReason};
use crate::config::EngineSettings;
use crate::entitlement::{
    CycleEntitlement, CycleEntitlementCalculator, MidCycleAdditionalVoucherCalculator,
};
use crate::error::EntitlementResult;

/// Pre-configured entitlement runner
#[derive(Debug, Clone, Copy)]
pub struct EntitlementRunner {
    settings: EngineSettings,
    cycle_calculator: CycleEntitlementCalculator,
    midcycle_calculator: MidCycleAdditionalVoucherCalculator,
}

impl EntitlementRunner {
    /// Create a runner with the standard programme settings
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default_programme())
    }

    /// Create a runner with pre-built settings
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            settings,
            cycle_calculator: CycleEntitlementCalculator::new(settings),
            midcycle_calculator: MidCycleAdditionalVoucherCalculator::new(
                settings.cycle,
                settings.rates,
            ),
        }
    }

    /// Create a runner by loading settings from the default JSON location
    pub fn from_json() -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_settings(EngineSettings::from_json()?))
    }

    /// Create a runner from a specific settings file
    pub fn from_json_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_settings(EngineSettings::from_json_path(path)?))
    }

    /// The settings this runner was built with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Calculate the cycle entitlement for one claim
    pub fn run(
        &self,
        claim: &Claim,
        previous_entitlement: Option<&CycleEntitlement>,
    ) -> EntitlementResult<CycleEntitlement> {
        self.cycle_calculator.calculate(
            claim.pregnancy,
            &claim.children_dobs,
            claim.cycle_start_date,
            previous_entitlement,
            claim.qualifying_reason,
        )
    }

    /// Top-up vouchers when a pregnancy is declared mid-cycle
    ///
    /// The cycle end date is derived from configuration, so callers supply
    /// only the cycle start and the date the claim was updated.
    pub fn additional_pregnancy_vouchers(
        &self,
        due_date: NaiveDate,
        cycle_start_date: NaiveDate,
        claim_update_date: NaiveDate,
        qualifying_reason: QualifyingReason,
    ) -> u32 {
        let cycle_end_date = self.settings.cycle.cycle_end_date(cycle_start_date);
        self.midcycle_calculator.calculate(
            due_date,
            cycle_start_date,
            cycle_end_date,
            claim_update_date,
            qualifying_reason,
        )
    }
}

impl Default for EntitlementRunner {
    fn default() -> Self {
        Self::new()
    }
}
