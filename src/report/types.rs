//! The six report variants a rover can send during a mission.

use serde::{Deserialize, Serialize};
use crate::report::payload::ImageData;
use crate::report::{Summarizable, completion_marker};
use crate::types::null_as_default;

/// A partial image (chunk) report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageReport {

    /// The mission this chunk belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// Image chunk identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub chunk_id: u16,

    /// Image chunk payload, if any was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ImageData>,

    /// True if this is the last chunk for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool,

    /// The full image reassembled upstream once every chunk arrived.
    /// This is base64 text and is never decoded here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembled_image: Option<String>
}
impl ImageReport {

    /// Length of the chunk payload, 0 when absent.
    pub fn byte_len(&self) -> usize {
        self.data.as_ref().map_or(0, ImageData::len)
    }
}
impl Summarizable for ImageReport {
    fn report_type(&self) -> &'static str {
        "Image"
    }

    fn summary(&self) -> String {
        format!(
            "Chunk #{} ({} bytes) {}",
            self.chunk_id,
            self.byte_len(),
            completion_marker(self.is_last_report)
        )
    }
}

/// A chemical component with name and percentage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Component {

    /// Chemical name (e.g., "O2", "CO2", "H2O").
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Percentage (0.0 to 100.0).
    #[serde(deserialize_with = "null_as_default")]
    pub percentage: f64
}

/// A chemical components report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleReport {

    /// The mission this sample belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// Number of chemical components, as declared by the rover.
    #[serde(deserialize_with = "null_as_default")]
    pub num_samples: u8,

    /// Chemical components, in the order they were analysed.
    #[serde(deserialize_with = "null_as_default")]
    pub components: Vec<Component>,

    /// True if this is the last sample report for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool
}
impl Summarizable for SampleReport {
    fn report_type(&self) -> &'static str {
        "Sample"
    }

    fn summary(&self) -> String {
        let components = self.components
            .iter()
            .map(|c| format!("{}={:.2}%", c.name, c.percentage))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} components: [{}] {}",
            self.num_samples,
            components,
            completion_marker(self.is_last_report)
        )
    }
}

/// Atmospheric measurements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvReport {

    /// The mission these readings belong to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// Temperature (Celsius).
    #[serde(deserialize_with = "null_as_default")]
    pub temp: f64,

    /// Oxygen percentage.
    #[serde(deserialize_with = "null_as_default")]
    pub oxygen: f64,

    /// Atmospheric pressure (hPa).
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,

    /// Humidity percentage.
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,

    /// Wind speed (m/s).
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,

    /// Radiation level (µSv).
    #[serde(deserialize_with = "null_as_default")]
    pub radiation: f64,

    /// True if this is the last environment report for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool
}
impl Summarizable for EnvReport {
    fn report_type(&self) -> &'static str {
        "Environment"
    }

    fn summary(&self) -> String {
        format!(
            "T={:.2}°C, O2={:.2}%, P={:.2}hPa, H={:.2}%, V={:.2}m/s, R={:.2}µSv {}",
            self.temp,
            self.oxygen,
            self.pressure,
            self.humidity,
            self.wind_speed,
            self.radiation,
            completion_marker(self.is_last_report)
        )
    }
}

/// The result of a repair attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RepairReport {

    /// The mission this repair belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// Problem identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub problem_id: u8,

    /// True if the problem was repaired.
    #[serde(deserialize_with = "null_as_default")]
    pub repairable: bool,

    /// True if this is the last repair report for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool
}
impl Summarizable for RepairReport {
    fn report_type(&self) -> &'static str {
        "Repair"
    }

    fn summary(&self) -> String {
        let status = if self.repairable { "✓ Repaired" } else { "✗ Not repairable" };
        format!(
            "Problem #{} - {} {}",
            self.problem_id,
            status,
            completion_marker(self.is_last_report)
        )
    }
}

/// A topographic point (coordinate and height).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TopoReport {

    /// The mission this point belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// Latitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,

    /// Longitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,

    /// Height in meters.
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,

    /// True if this is the last topographic report for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool
}
impl Summarizable for TopoReport {
    fn report_type(&self) -> &'static str {
        "Topography"
    }

    fn summary(&self) -> String {
        format!(
            "({:.4}°, {:.4}°) h={:.2}m {}",
            self.latitude,
            self.longitude,
            self.height,
            completion_marker(self.is_last_report)
        )
    }
}

/// Success or failure of an instrument installation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallReport {

    /// The mission this installation belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub mission_id: u16,

    /// True if installation succeeded.
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,

    /// True if this is the last installation report for the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub is_last_report: bool
}
impl Summarizable for InstallReport {
    fn report_type(&self) -> &'static str {
        "Install"
    }

    fn summary(&self) -> String {
        let status = if self.success { "✓ Success" } else { "✗ Failed" };
        format!("{} {}", status, completion_marker(self.is_last_report))
    }
}
