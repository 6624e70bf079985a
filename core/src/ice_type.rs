//! Catalog of ice composition classes.
//!
//! Each class carries a strength multiplier relative to clear ice at the same
//! thickness. The multiplier feeds the thickness/load formulas in
//! [`crate::safety`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UnknownIceType;

/// Ice composition class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceType {
    /// Clear blue ice from slow freezing of still water.
    #[default]
    Clear,
    /// White/opaque ice with trapped air.
    White,
    /// Grey ice saturated with water.
    Grey,
}

/// Flattened catalog entry for callers across the FFI boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct IceTypeInfo {
    pub ice_type: IceType,
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub strength_multiplier: f64,
}

impl IceType {
    pub const ALL: [IceType; 3] = [IceType::Clear, IceType::White, IceType::Grey];

    /// Persisted text key.
    pub fn key(&self) -> &'static str {
        match self {
            IceType::Clear => "clear",
            IceType::White => "white",
            IceType::Grey => "grey",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IceType::Clear => "Clear Blue Ice",
            IceType::White => "White/Opaque Ice",
            IceType::Grey => "Grey Ice",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IceType::Clear => "Strongest type of ice. Formed by slow freezing of still water.",
            IceType::White => "Contains air bubbles. About 50% weaker than clear ice.",
            IceType::Grey => "Very dangerous! Contains water. Do not walk on grey ice.",
        }
    }

    /// Load-bearing capacity relative to clear ice.
    pub fn strength_multiplier(&self) -> f64 {
        match self {
            IceType::Clear => 1.0,
            IceType::White => 0.5,
            IceType::Grey => 0.15,
        }
    }

    /// Decode a persisted key, falling back to [`IceType::Clear`] for
    /// anything unrecognised so older or newer records still load.
    pub fn from_key_lenient(key: &str) -> IceType {
        key.parse().unwrap_or_default()
    }

    pub fn info(&self) -> IceTypeInfo {
        IceTypeInfo {
            ice_type: *self,
            key: self.key().to_string(),
            display_name: self.display_name().to_string(),
            description: self.description().to_string(),
            strength_multiplier: self.strength_multiplier(),
        }
    }
}

impl fmt::Display for IceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IceType {
    type Err = UnknownIceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(IceType::Clear),
            "white" => Ok(IceType::White),
            "grey" | "gray" => Ok(IceType::Grey),
            _ => Err(UnknownIceType(s.to_string())),
        }
    }
}

/// Serde hook for persisted records: any value that is not a known key
/// (wrong type, null, unknown text) decodes to [`IceType::Clear`] instead of
/// failing the whole array.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<IceType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(IceType::from_key_lenient)
        .unwrap_or_default())
}
