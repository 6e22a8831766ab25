//! Missions and their reports.

use std::collections::BTreeMap;
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use crate::error::ModelResult;
use crate::report::{Report, ReportFactory, TaskType};
use crate::types::{Coordinate, null_as_default};

/// Durations travel on the wire as integer nanoseconds.
mod duration_nanos {
    use std::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let nanos = Option::<i64>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Duration::from_nanos(u64::try_from(nanos).unwrap_or(0)))
    }
}

/// The last known state of a mission, with every report received so far.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {

    /// Unique mission ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u16,

    /// ID of the rover assigned to the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub id_rover: u8,

    /// Raw task discriminant, shared with the mission's reports.
    #[serde(deserialize_with = "null_as_default")]
    pub task_type: u8,

    /// Duration since mission start.
    #[serde(with = "duration_nanos")]
    pub duration: Duration,

    /// Frequency of report updates.
    #[serde(with = "duration_nanos")]
    pub update_frequency: Duration,

    /// Time of the last update.
    pub last_update: Option<DateTime<Utc>>,

    /// Time the mission was created.
    pub created_at: Option<DateTime<Utc>>,

    /// Priority level of the mission.
    #[serde(deserialize_with = "null_as_default")]
    pub priority: u8,

    /// Mission state (e.g., "Pending", "Moving to", "In Progress", "Completed").
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,

    /// Target coordinate, `(0, 0)` when absent.
    #[serde(deserialize_with = "null_as_default")]
    pub coordinate: Coordinate,

    /// Full image reassembled upstream, carried as base64 text.
    pub assembled_image: Option<String>,

    /// Reports in the order they were received.
    /// An entry that could not be dispatched is kept as `None` so positions
    /// line up with the raw snapshot.
    #[serde(skip_deserializing)]
    pub reports: Vec<Option<Report>>
}
impl Mission {

    /// Build a mission from an already-deserialized wire object using the default factory.
    pub fn from_value(raw: &serde_json::Value) -> ModelResult<Self> {
        Self::from_value_with(raw, &ReportFactory::default())
    }

    /// Build a mission from an already-deserialized wire object.
    ///
    /// Faulty reports never fail the mission, only metadata that can't be
    /// represented at all does.
    pub fn from_value_with(raw: &serde_json::Value, factory: &ReportFactory) -> ModelResult<Self> {
        let mut mission = Self::deserialize(raw)?;

        mission.reports = match raw.get("reports") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(serde_json::Value::Array(entries)) => factory.instantiate_all(entries),
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "invalid type for 'reports': expected a sequence, got {other}"
                )).into());
            }
        };

        Ok(mission)
    }

    /// Build a mission from JSON text using the default factory.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&raw)
    }

    /// The mission task, if the discriminant is a known one.
    pub fn task(&self) -> Option<TaskType> {
        TaskType::try_from(self.task_type).ok()
    }

    /// Iterate the reports that were successfully built.
    pub fn valid_reports(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().flatten()
    }

    /// Number of raw entries that were dropped.
    pub fn dropped_reports(&self) -> usize {
        self.reports.iter().filter(|r| r.is_none()).count()
    }

    /// Has the rover sent the terminal report of its sequence.
    pub fn is_complete(&self) -> bool {
        self.valid_reports().any(Report::is_last)
    }

    /// Concatenate the decoded image chunks in chunk order.
    ///
    /// A repeated chunk ID keeps the most recently received chunk. Returns
    /// `None` if the mission holds no decoded image chunk.
    pub fn assemble_image_chunks(&self) -> Option<Vec<u8>> {
        let chunks: BTreeMap<u16, &[u8]> = self
            .valid_reports()
            .filter_map(|report| match report {
                Report::Image(image) => {
                    let bytes = image.data.as_ref()?.as_bytes()?;
                    Some((image.chunk_id, bytes))
                }
                _ => None,
            })
            .collect();

        if chunks.is_empty() {
            return None;
        }
        Some(chunks.into_values().flatten().copied().collect())
    }
}
