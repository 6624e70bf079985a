//! Transient calculator state for one assessment.
//!
//! Holds the inputs a user is editing and re-runs [`assess_safety`] on
//! demand. Nothing here is observed or persisted; callers re-invoke
//! [`AssessmentSession::assess`] after changing inputs.

use tracing::debug;

use crate::config::CoreConfig;
use crate::equipment::{equipment_presets, total_equipment_weight_kg, Equipment};
use crate::ice_type::IceType;
use crate::safety::{assess_safety, SafetyResult};

/// Thickness offered by the calculator (cm).
pub const THICKNESS_RANGE_CM: (f64, f64) = (0.0, 50.0);

/// Group size offered by the calculator.
pub const PEOPLE_RANGE: (u32, u32) = (1, 20);

const DEFAULT_THICKNESS_CM: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentSession {
    thickness_cm: f64,
    ice_type: IceType,
    people_count: u32,
    equipment: Vec<Equipment>,
    clamp_inputs: bool,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new(&CoreConfig::default())
    }
}

impl AssessmentSession {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            thickness_cm: DEFAULT_THICKNESS_CM,
            ice_type: IceType::Clear,
            people_count: PEOPLE_RANGE.0,
            equipment: equipment_presets(),
            clamp_inputs: config.clamp_inputs,
        }
    }

    pub fn thickness_cm(&self) -> f64 {
        self.thickness_cm
    }

    pub fn ice_type(&self) -> IceType {
        self.ice_type
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn set_thickness_cm(&mut self, thickness_cm: f64) {
        self.thickness_cm = if self.clamp_inputs {
            thickness_cm.clamp(THICKNESS_RANGE_CM.0, THICKNESS_RANGE_CM.1)
        } else {
            thickness_cm
        };
    }

    pub fn set_ice_type(&mut self, ice_type: IceType) {
        self.ice_type = ice_type;
    }

    pub fn set_people_count(&mut self, people_count: u32) {
        self.people_count = if self.clamp_inputs {
            people_count.clamp(PEOPLE_RANGE.0, PEOPLE_RANGE.1)
        } else {
            people_count
        };
    }

    /// Flip whether the item at `index` counts towards the load. Returns the
    /// new state, or `None` for an unknown index.
    pub fn toggle_equipment(&mut self, index: usize) -> Option<bool> {
        let item = self.equipment.get_mut(index)?;
        item.is_selected = !item.is_selected;
        debug!(item = %item.name, selected = item.is_selected, "toggled equipment");
        Some(item.is_selected)
    }

    /// Override the weight of the item at `index`. Returns `false` for an
    /// unknown index.
    pub fn set_equipment_weight(&mut self, index: usize, weight_kg: f64) -> bool {
        match self.equipment.get_mut(index) {
            Some(item) => {
                item.custom_weight_kg = Some(weight_kg.max(0.0));
                true
            }
            None => false,
        }
    }

    pub fn total_equipment_weight_kg(&self) -> f64 {
        total_equipment_weight_kg(&self.equipment)
    }

    pub fn assess(&self) -> SafetyResult {
        assess_safety(
            self.thickness_cm,
            self.ice_type,
            self.people_count,
            self.total_equipment_weight_kg(),
        )
    }

    /// Back to the defaults, keeping the clamping setting.
    pub fn reset(&mut self) {
        let clamp_inputs = self.clamp_inputs;
        *self = Self {
            clamp_inputs,
            ..Self::default()
        };
    }
}
