//! JSON-based settings loader
//!
//! Loads engine settings from a single JSON file, funnelling the raw values
//! through `CycleConfig::new` so that file input cannot bypass validation.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::{CycleConfig, EngineSettings, VoucherRates};

/// Default path to the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "data/settings.json";

/// Raw settings record as it appears on disk
#[derive(Debug, Deserialize)]
struct RawSettings {
    cycle_duration_days: u32,
    number_of_calculation_periods: u32,
    weeks_before_due_date: u32,
    weeks_after_due_date: u32,
    pregnancy_grace_period_weeks: u32,
    under_18_pregnancy_grace_period_weeks: u32,
    vouchers_per_pregnancy: u32,
    vouchers_per_child_under_one: u32,
    vouchers_per_child_one_to_four: u32,
    voucher_value_in_pence: u32,
}

impl RawSettings {
    fn into_settings(self) -> Result<EngineSettings, Box<dyn Error>> {
        let cycle = CycleConfig::new(
            self.cycle_duration_days,
            self.number_of_calculation_periods,
            self.weeks_before_due_date,
            self.weeks_after_due_date,
            self.pregnancy_grace_period_weeks,
            self.under_18_pregnancy_grace_period_weeks,
        )?;

        let rates = VoucherRates {
            vouchers_per_pregnancy: self.vouchers_per_pregnancy,
            vouchers_per_child_under_one: self.vouchers_per_child_under_one,
            vouchers_per_child_one_to_four: self.vouchers_per_child_one_to_four,
            voucher_value_in_pence: self.voucher_value_in_pence,
        };

        Ok(EngineSettings { cycle, rates })
    }
}

/// Load settings from a JSON file
pub fn load_settings(path: &Path) -> Result<EngineSettings, Box<dyn Error>> {
    let file = File::open(path)?;
    let raw: RawSettings = serde_json::from_reader(file)?;
    raw.into_settings()
}
