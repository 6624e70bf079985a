use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::ice_type::{self, IceType};

/// Source of the current time for newly created records.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A user's ice thickness observation.
///
/// Serialized with the field names of the persisted log:
/// `id`, `date`, `locationName`, `thickness`, `iceType`, `notes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location_name: String,
    /// Thickness in centimetres, never negative.
    #[serde(deserialize_with = "deserialize_thickness")]
    pub thickness: f64,
    #[serde(default, deserialize_with = "ice_type::deserialize_lenient")]
    pub ice_type: IceType,
    #[serde(default)]
    pub notes: String,
}

impl MeasurementRecord {
    /// New record with a fresh id, dated now.
    pub fn new(
        location_name: impl Into<String>,
        thickness: f64,
        ice_type: IceType,
        notes: impl Into<String>,
    ) -> Self {
        Self::new_with_clock(&SystemClock, location_name, thickness, ice_type, notes)
    }

    pub fn new_with_clock<C: Clock>(
        clock: &C,
        location_name: impl Into<String>,
        thickness: f64,
        ice_type: IceType,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: clock.now(),
            location_name: location_name.into(),
            thickness: thickness.max(0.0),
            ice_type,
            notes: notes.into(),
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

/// Persisted thickness is floored at zero like newly created records.
fn deserialize_thickness<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(f64::deserialize(deserializer)?.max(0.0))
}
