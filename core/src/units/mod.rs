//! Unit conversion, display formatting and parsing.
//!
//! The core computes in centimetres, kilograms and degrees Celsius. This
//! module converts to and from imperial units, renders values for display,
//! and parses unit-suffixed text back into metric values.
//!
//! # Example
//!
//! ```
//! use icesafe_core::units::{format_thickness, parse_thickness_cm};
//!
//! assert_eq!(format_thickness(10.0, false), "10.0 cm");
//! assert_eq!(format_thickness(10.0, true), "3.9\"");
//!
//! let cm = parse_thickness_cm("4 in").expect("valid thickness");
//! assert!((cm - 10.16).abs() < 1e-9);
//! ```

pub mod parser;

pub use parser::{parse_temperature_c, parse_thickness_cm, parse_weight_kg};

use serde::{Deserialize, Serialize};

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Thickness to one decimal place: `"10.0 cm"` or `"3.9\""`.
pub fn format_thickness(cm: f64, use_inches: bool) -> String {
    if use_inches {
        format!("{:.1}\"", cm_to_inches(cm))
    } else {
        format!("{:.1} cm", cm)
    }
}

/// Weight to whole units: `"80 kg"` or `"176 lbs"`.
pub fn format_weight(kg: f64, use_lbs: bool) -> String {
    if use_lbs {
        format!("{:.0} lbs", kg_to_lbs(kg))
    } else {
        format!("{:.0} kg", kg)
    }
}

/// Temperature to whole degrees: `"-10°C"` or `"14°F"`.
pub fn format_temperature(celsius: f64, use_fahrenheit: bool) -> String {
    if use_fahrenheit {
        format!("{:.0}°F", celsius_to_fahrenheit(celsius))
    } else {
        format!("{:.0}°C", celsius)
    }
}

/// Which imperial units a user prefers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPreferences {
    pub use_inches: bool,
    pub use_lbs: bool,
    pub use_fahrenheit: bool,
}

impl UnitPreferences {
    pub fn metric() -> Self {
        Self::default()
    }

    pub fn imperial() -> Self {
        Self {
            use_inches: true,
            use_lbs: true,
            use_fahrenheit: true,
        }
    }

    pub fn thickness(&self, cm: f64) -> String {
        format_thickness(cm, self.use_inches)
    }

    pub fn weight(&self, kg: f64) -> String {
        format_weight(kg, self.use_lbs)
    }

    pub fn temperature(&self, celsius: f64) -> String {
        format_temperature(celsius, self.use_fahrenheit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        assert!((cm_to_inches(2.54) - 1.0).abs() < f64::EPSILON);
        assert!((inches_to_cm(4.0) - 10.16).abs() < 1e-12);
    }

    #[test]
    fn test_mass_conversions() {
        assert!((kg_to_lbs(80.0) - 176.3696).abs() < 1e-9);
        assert!((lbs_to_kg(kg_to_lbs(42.0)) - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_conversions() {
        assert!((celsius_to_fahrenheit(-10.0) - 14.0).abs() < 1e-12);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-12);
        assert!((fahrenheit_to_celsius(32.0)).abs() < 1e-12);
        assert!((fahrenheit_to_celsius(-40.0) + 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_format_thickness() {
        assert_eq!(format_thickness(10.0, false), "10.0 cm");
        assert_eq!(format_thickness(10.0, true), "3.9\"");
        assert_eq!(format_thickness(9.537, false), "9.5 cm");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(80.0, false), "80 kg");
        assert_eq!(format_weight(80.0, true), "176 lbs");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(-10.0, false), "-10°C");
        assert_eq!(format_temperature(-10.0, true), "14°F");
    }

    #[test]
    fn test_unit_preferences() {
        let imperial = UnitPreferences::imperial();
        assert_eq!(imperial.thickness(10.0), "3.9\"");
        assert_eq!(imperial.weight(80.0), "176 lbs");
        assert_eq!(imperial.temperature(-10.0), "14°F");

        let metric = UnitPreferences::metric();
        assert_eq!(metric.thickness(10.0), "10.0 cm");
        assert_eq!(metric.weight(80.0), "80 kg");
        assert_eq!(metric.temperature(-10.0), "-10°C");
    }
}
