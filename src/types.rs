//! Generic types shared by rovers, missions and reports.

use serde::{Deserialize, Deserializer, Serialize};
use crate::error::ModelResult;

/// Treat an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A geographic position in decimal degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Coordinate {

    /// Latitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,

    /// Longitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64
}
impl Coordinate {

    /// Create a coordinate from a latitude/longitude pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A point-in-time telemetry snapshot of a rover.
///
/// Snapshots are replaced wholesale on every telemetry update, nothing
/// here is ever partially mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Rover {

    /// Rover identifier assigned by the mothership.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u8,

    /// Current rover state (e.g., "Idle", "Moving", "Error").
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,

    /// Battery level percentage.
    #[serde(deserialize_with = "null_as_default")]
    pub battery: u8,

    /// Speed in m/s.
    #[serde(deserialize_with = "null_as_default")]
    pub speed: f64,

    /// Current position, `(0, 0)` when the rover has not reported one.
    #[serde(deserialize_with = "null_as_default")]
    pub position: Coordinate,

    /// Telemetry update frequency in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub update_frequency: u32,

    /// Consecutive telemetry failures count.
    #[serde(deserialize_with = "null_as_default")]
    pub missed_telemetry: u32
}
impl Rover {

    /// Build a rover snapshot from an already-deserialized wire object.
    pub fn from_value(raw: &serde_json::Value) -> ModelResult<Self> {
        Ok(Self::deserialize(raw)?)
    }

    /// Build a rover snapshot from JSON text.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
impl std::fmt::Display for Rover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rover {} | State: {} | Battery: {}% | Speed: {:.2} m/s",
            self.id, self.state, self.battery, self.speed
        )
    }
}
