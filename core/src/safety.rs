//! Load-bearing assessment for ice.
//!
//! Uses the empirical rule `thickness (in) = 2 * sqrt(load (lb) / 50)` in its
//! metric form, scaled by the ice type's strength multiplier. All functions
//! are pure and accept any numeric input; range clamping is left to callers
//! (see [`crate::session::AssessmentSession`]).

use crate::ice_type::IceType;

// ============================================================================
// Constants
// ============================================================================

/// Average mass of one person (kg).
pub const AVERAGE_PERSON_MASS_KG: f64 = 80.0;

/// Load constant of the metric thickness rule (kg). 50 lb = 22.7 kg.
const LOAD_CONSTANT_KG: f64 = 22.7;

/// Thickness constant of the metric thickness rule (cm). 2 in = 5.08 cm.
const THICKNESS_CONSTANT_CM: f64 = 5.08;

/// Below this ratio of actual to required thickness the ice is dangerous.
const DANGER_RATIO: f64 = 0.8;

/// Below this ratio the ice is marginal.
const WARNING_RATIO: f64 = 1.2;

/// Below this thickness (cm) self-rescue gear is recommended.
const SELF_RESCUE_THICKNESS_CM: f64 = 10.0;

/// Above this group size spacing out is recommended.
const SPREAD_OUT_GROUP_SIZE: u32 = 3;

// ============================================================================
// Types
// ============================================================================

/// Categorical safety verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SafetyLevel {
    Danger,
    Warning,
    Safe,
}

impl SafetyLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyLevel::Danger => "DANGEROUS",
            SafetyLevel::Warning => "RISKY",
            SafetyLevel::Safe => "SAFE",
        }
    }
}

/// Outcome of a single assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyResult {
    pub level: SafetyLevel,
    /// Assessed thickness (cm), as given.
    pub current_thickness_cm: f64,
    /// Minimum thickness (cm) for the assessed load.
    pub recommended_thickness_cm: f64,
    /// Maximum safe load (kg) at the assessed thickness.
    pub max_load_kg: f64,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SafetyResult {
    /// Current thickness as a percentage of the recommended thickness.
    pub fn safety_margin(&self) -> f64 {
        if self.recommended_thickness_cm <= 0.0 {
            return 0.0;
        }
        (self.current_thickness_cm / self.recommended_thickness_cm) * 100.0
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Minimum thickness (cm) needed to carry `load_kg` on the given ice type.
pub fn required_thickness_cm(load_kg: f64, ice_type: IceType) -> f64 {
    let base = (load_kg / LOAD_CONSTANT_KG).sqrt() * THICKNESS_CONSTANT_CM;
    base / ice_type.strength_multiplier()
}

/// Maximum safe load (kg) for the given thickness and ice type.
///
/// Inverse of [`required_thickness_cm`], computed on the strength-adjusted
/// thickness.
pub fn max_load_kg(thickness_cm: f64, ice_type: IceType) -> f64 {
    let effective_thickness = thickness_cm * ice_type.strength_multiplier();
    let load = (effective_thickness / THICKNESS_CONSTANT_CM).powi(2) * LOAD_CONSTANT_KG;
    load.max(0.0)
}

/// Assess whether ice of the given thickness and type carries a group of
/// `people_count` people plus `equipment_weight_kg` of gear.
///
/// Warnings and recommendations are returned in a fixed order: the verdict
/// branch first, then the ice-type, thin-ice and group-size notes. A thickness
/// or equipment weight that is NaN or infinite is always `Danger`.
pub fn assess_safety(
    thickness_cm: f64,
    ice_type: IceType,
    people_count: u32,
    equipment_weight_kg: f64,
) -> SafetyResult {
    let total_load_kg = f64::from(people_count) * AVERAGE_PERSON_MASS_KG + equipment_weight_kg;

    let recommended = required_thickness_cm(total_load_kg, ice_type);
    let max_load = max_load_kg(thickness_cm, ice_type);

    // Zero required thickness only happens with zero load.
    let safety_ratio = if recommended > 0.0 {
        thickness_cm / recommended
    } else {
        f64::INFINITY
    };

    let mut warnings: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    let level = if ice_type == IceType::Grey {
        warnings.push("Grey ice is extremely dangerous and unpredictable".to_string());
        recommendations.push("Do not walk on grey ice under any circumstances".to_string());
        SafetyLevel::Danger
    } else if !thickness_cm.is_finite() || !equipment_weight_kg.is_finite() {
        // NaN compares false against both ratio thresholds.
        warnings.push("Ice thickness or load is not a valid number".to_string());
        recommendations.push("Re-measure the ice before going out".to_string());
        SafetyLevel::Danger
    } else if safety_ratio < DANGER_RATIO {
        warnings.push("Ice is too thin for your planned activity".to_string());
        recommendations.push("Wait for ice to thicken or reduce load significantly".to_string());
        SafetyLevel::Danger
    } else if safety_ratio < WARNING_RATIO {
        warnings.push("Ice thickness is marginal for safety".to_string());
        recommendations.push("Proceed with extreme caution".to_string());
        recommendations.push("Stay close to shore and have rescue equipment ready".to_string());
        SafetyLevel::Warning
    } else {
        recommendations.push("Ice appears adequate for your planned activity".to_string());
        recommendations.push("Always test ice regularly as you move".to_string());
        SafetyLevel::Safe
    };

    if ice_type == IceType::White && level != SafetyLevel::Danger {
        warnings.push("White ice is about 50% weaker than clear ice".to_string());
    }

    if thickness_cm < SELF_RESCUE_THICKNESS_CM {
        recommendations.push("Consider using ice picks and a flotation device".to_string());
    }

    if people_count > SPREAD_OUT_GROUP_SIZE {
        recommendations.push("Spread out group at least 3 metres apart".to_string());
    }

    SafetyResult {
        level,
        current_thickness_cm: thickness_cm,
        recommended_thickness_cm: recommended,
        max_load_kg: max_load,
        warnings,
        recommendations,
    }
}

// ============================================================================
// Tests
// ============================================================================
