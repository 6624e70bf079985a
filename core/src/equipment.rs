//! Gear presets contributing extra load to an assessment.

/// One piece of gear. Owned by the current assessment, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Equipment {
    pub name: String,
    /// Default weight (kg).
    pub default_weight_kg: f64,
    /// Whether the item counts towards the load.
    pub is_selected: bool,
    /// User override of the default weight (kg).
    pub custom_weight_kg: Option<f64>,
}

impl Equipment {
    pub fn new(name: impl Into<String>, default_weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            default_weight_kg,
            is_selected: false,
            custom_weight_kg: None,
        }
    }

    /// Effective weight: the override when present, else the default.
    pub fn weight_kg(&self) -> f64 {
        self.custom_weight_kg.unwrap_or(self.default_weight_kg)
    }
}

/// The fixed preset list, nothing selected.
pub fn equipment_presets() -> Vec<Equipment> {
    vec![
        Equipment::new("Snowmobile", 250.0),
        Equipment::new("Ice House/Shelter", 150.0),
        Equipment::new("Ice Auger", 15.0),
        Equipment::new("Fishing Gear", 30.0),
    ]
}

/// Sum of effective weights of the selected items.
pub fn total_equipment_weight_kg(equipment: &[Equipment]) -> f64 {
    equipment
        .iter()
        .filter(|e| e.is_selected)
        .map(Equipment::weight_kg)
        .sum()
}
