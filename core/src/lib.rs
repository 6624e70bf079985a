pub mod config;
pub mod equipment;
pub mod error;
pub mod ffi;
pub mod growth;
pub mod ice_type;
pub mod measurement_log;
pub mod models;
pub mod safety;
pub mod session;
pub mod storage;
pub mod units;

uniffi::include_scaffolding!("icesafe");

pub use config::CoreConfig;
pub use equipment::{equipment_presets, Equipment};
pub use error::{LogError, StoreError, UnitParseError, UnknownIceType};
pub use ffi::{
    all_ice_types, ice_type_from_key, ice_type_info, safety_margin_percent,
    total_equipment_weight_kg,
};
pub use growth::{daily_growth_cm, days_to_reach_thickness, ice_growth_cm};
pub use ice_type::{IceType, IceTypeInfo};
pub use measurement_log::MeasurementLog;
pub use models::{Clock, MeasurementRecord, SystemClock};
pub use safety::{assess_safety, max_load_kg, required_thickness_cm, SafetyLevel, SafetyResult};
pub use session::AssessmentSession;
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use units::{
    celsius_to_fahrenheit, cm_to_inches, fahrenheit_to_celsius, format_temperature,
    format_thickness, format_weight, inches_to_cm, kg_to_lbs, lbs_to_kg, parse_temperature_c,
    parse_thickness_cm, parse_weight_kg, UnitPreferences,
};
