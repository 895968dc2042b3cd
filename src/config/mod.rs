//! Engine configuration: cycle geometry, entitlement windows, voucher rates

mod cycle;
mod rates;
pub mod loader;

pub use cycle::CycleConfig;
pub use rates::VoucherRates;

use std::error::Error;
use std::path::Path;

/// Container for all configuration the engine needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub cycle: CycleConfig,
    pub rates: VoucherRates,
}

impl EngineSettings {
    /// Settings for the standard programme, matching the live scheme values
    pub fn default_programme() -> Self {
        Self {
            cycle: CycleConfig::default_programme(),
            rates: VoucherRates::default(),
        }
    }

    /// Load settings from a JSON file in the default location (data/settings.json)
    pub fn from_json() -> Result<Self, Box<dyn Error>> {
        Self::from_json_path(Path::new(loader::DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from a specific JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        loader::load_settings(path)
    }
}
