//! Owned-value wrappers for the foreign-language bindings.
//!
//! The UDL interface passes records and strings by value; these adapt the
//! borrowing Rust API to that shape.

use crate::equipment::{self, Equipment};
use crate::ice_type::{IceType, IceTypeInfo};
use crate::safety::SafetyResult;

pub fn safety_margin_percent(assessment: SafetyResult) -> f64 {
    assessment.safety_margin()
}

pub fn ice_type_info(ice_type: IceType) -> IceTypeInfo {
    ice_type.info()
}

/// Lenient: unknown keys give [`IceType::Clear`].
pub fn ice_type_from_key(key: String) -> IceType {
    IceType::from_key_lenient(&key)
}

pub fn all_ice_types() -> Vec<IceTypeInfo> {
    IceType::ALL.iter().map(IceType::info).collect()
}

pub fn total_equipment_weight_kg(items: Vec<Equipment>) -> f64 {
    equipment::total_equipment_weight_kg(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::assess_safety;

    #[test]
    fn test_wrappers_match_rust_api() {
        let result = assess_safety(15.0, IceType::Clear, 1, 0.0);
        assert_eq!(safety_margin_percent(result.clone()), result.safety_margin());

        assert_eq!(ice_type_from_key("grey".to_string()), IceType::Grey);
        assert_eq!(ice_type_from_key("mud".to_string()), IceType::Clear);

        let infos = all_ice_types();
        assert_eq!(infos.len(), 3);
        assert_eq!(infos[2], ice_type_info(IceType::Grey));

        let mut presets = equipment::equipment_presets();
        presets[2].is_selected = true;
        assert_eq!(total_equipment_weight_kg(presets), 15.0);
    }
}
