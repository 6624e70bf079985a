use serde::{Deserialize, Serialize};

use crate::units::UnitPreferences;

/// Key under which the measurement log array is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "measurementRecords";

/// Settings for the core, supplied by the host application.
///
/// Missing fields take their defaults, so an empty JSON object is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Blob key holding the whole measurement log.
    pub storage_key: String,
    /// Display units.
    pub units: UnitPreferences,
    /// Clamp calculator inputs to the ranges the app offers.
    pub clamp_inputs: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            units: UnitPreferences::default(),
            clamp_inputs: true,
        }
    }
}

impl CoreConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
