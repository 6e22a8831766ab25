//! Mission reports.
//! A report is one of a closed set of shapes selected by its `taskType` discriminant.

use serde::{Deserialize, Serialize, Serializer};
use crate::error::{ModelError, ModelResult};

pub mod factory;
pub mod payload;
pub mod types;

pub use factory::{DropReason, DroppedReport, ReportFactory};
pub use payload::ImageData;
pub use types::*;

/// Appended to a summary when the report terminates its sequence.
const LAST_MARKER: &str = "✓ Last";

pub(crate) fn completion_marker(is_last: bool) -> &'static str {
    if is_last { LAST_MARKER } else { "" }
}

/// Uniform display contract shared by every report shape.
pub trait Summarizable {
    /// A fixed human-readable label for the report shape.
    fn report_type(&self) -> &'static str;

    /// A one-line human-readable summary of the report fields.
    fn summary(&self) -> String;
}

/// The task a mission (and each of its reports) carries out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Image capture, reported as chunks.
    ImageCapture,

    /// Chemical sample collection.
    SampleCollection,

    /// Environmental analysis.
    EnvAnalysis,

    /// Repair or rescue.
    RepairRescue,

    /// Topographic mapping.
    TopoMapping,

    /// Instrument installation.
    Installation,
}
impl TaskType {
    /// Read a discriminant from a wire value.
    ///
    /// Only integers in the known range are accepted. Note that `0` is a
    /// legitimate discriminant (image capture) and not an absent one.
    pub fn from_wire(tag: &serde_json::Value) -> ModelResult<Self> {
        if tag.is_null() {
            return Err(ModelError::MissingTaskType);
        }

        let unknown = || ModelError::UnknownTaskType(tag.to_string());
        let discriminant = tag
            .as_u64()
            .or_else(|| {
                tag.as_f64()
                    .filter(|f| f.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(f))
                    .map(|f| f as u64)
            })
            .ok_or_else(unknown)?;

        u8::try_from(discriminant)
            .map_err(|_| unknown())
            .and_then(Self::try_from)
    }
}
impl TryFrom<u8> for TaskType {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ImageCapture),
            1 => Ok(Self::SampleCollection),
            2 => Ok(Self::EnvAnalysis),
            3 => Ok(Self::RepairRescue),
            4 => Ok(Self::TopoMapping),
            5 => Ok(Self::Installation),
            other => Err(ModelError::UnknownTaskType(other.to_string())),
        }
    }
}
impl From<TaskType> for u8 {
    fn from(task_type: TaskType) -> Self {
        match task_type {
            TaskType::ImageCapture => 0,
            TaskType::SampleCollection => 1,
            TaskType::EnvAnalysis => 2,
            TaskType::RepairRescue => 3,
            TaskType::TopoMapping => 4,
            TaskType::Installation => 5,
        }
    }
}

/// A single report sent by a rover during a mission.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Image chunk.
    Image(ImageReport),

    /// Chemical components.
    Sample(SampleReport),

    /// Atmospheric readings.
    Environment(EnvReport),

    /// Repair attempt.
    Repair(RepairReport),

    /// Topographic point.
    Topography(TopoReport),

    /// Instrument installation.
    Install(InstallReport),
}
impl Report {
    /// Build a report with the default factory, `None` if it cannot be dispatched.
    pub fn instantiate(raw: &serde_json::Value) -> Option<Self> {
        ReportFactory::default().instantiate(raw)
    }

    /// Build a report, returning why it could not be built.
    pub fn from_value(raw: &serde_json::Value) -> ModelResult<Self> {
        let tag = raw.get("taskType").ok_or(ModelError::MissingTaskType)?;
        Self::build(TaskType::from_wire(tag)?, raw)
    }

    /// Construct the variant for a known task type from the whole raw object.
    /// Fields unrelated to the variant are ignored.
    fn build(task_type: TaskType, raw: &serde_json::Value) -> ModelResult<Self> {
        Ok(match task_type {
            TaskType::ImageCapture => Self::Image(ImageReport::deserialize(raw)?),
            TaskType::SampleCollection => Self::Sample(SampleReport::deserialize(raw)?),
            TaskType::EnvAnalysis => Self::Environment(EnvReport::deserialize(raw)?),
            TaskType::RepairRescue => Self::Repair(RepairReport::deserialize(raw)?),
            TaskType::TopoMapping => Self::Topography(TopoReport::deserialize(raw)?),
            TaskType::Installation => Self::Install(InstallReport::deserialize(raw)?),
        })
    }

    /// The task type this report was dispatched on.
    pub fn task_type(&self) -> TaskType {
        match self {
            Self::Image(_) => TaskType::ImageCapture,
            Self::Sample(_) => TaskType::SampleCollection,
            Self::Environment(_) => TaskType::EnvAnalysis,
            Self::Repair(_) => TaskType::RepairRescue,
            Self::Topography(_) => TaskType::TopoMapping,
            Self::Install(_) => TaskType::Installation,
        }
    }

    /// The mission this report belongs to.
    pub fn mission_id(&self) -> u16 {
        match self {
            Self::Image(r) => r.mission_id,
            Self::Sample(r) => r.mission_id,
            Self::Environment(r) => r.mission_id,
            Self::Repair(r) => r.mission_id,
            Self::Topography(r) => r.mission_id,
            Self::Install(r) => r.mission_id,
        }
    }

    /// Is this the terminal report of its sequence.
    pub fn is_last(&self) -> bool {
        match self {
            Self::Image(r) => r.is_last_report,
            Self::Sample(r) => r.is_last_report,
            Self::Environment(r) => r.is_last_report,
            Self::Repair(r) => r.is_last_report,
            Self::Topography(r) => r.is_last_report,
            Self::Install(r) => r.is_last_report,
        }
    }

    fn as_summarizable(&self) -> &dyn Summarizable {
        match self {
            Self::Image(r) => r,
            Self::Sample(r) => r,
            Self::Environment(r) => r,
            Self::Repair(r) => r,
            Self::Topography(r) => r,
            Self::Install(r) => r,
        }
    }
}
impl Summarizable for Report {
    fn report_type(&self) -> &'static str {
        self.as_summarizable().report_type()
    }

    fn summary(&self) -> String {
        self.as_summarizable().summary()
    }
}
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Mission {} - {}",
            self.report_type(),
            self.mission_id(),
            self.summary().trim_end()
        )
    }
}
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integer tags can't go through serde's internally tagged enums,
        // so the discriminant is spliced into the variant's own object.
        let mut value = match self {
            Self::Image(r) => serde_json::to_value(r),
            Self::Sample(r) => serde_json::to_value(r),
            Self::Environment(r) => serde_json::to_value(r),
            Self::Repair(r) => serde_json::to_value(r),
            Self::Topography(r) => serde_json::to_value(r),
            Self::Install(r) => serde_json::to_value(r),
        }
        .map_err(serde::ser::Error::custom)?;

        if let Some(object) = value.as_object_mut() {
            object.insert("taskType".to_string(), u8::from(self.task_type()).into());
        }
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_discriminant_is_an_image() {
        let report = Report::from_value(&json!({ "taskType": 0, "chunkId": 2 })).unwrap();
        assert_eq!(report.task_type(), TaskType::ImageCapture);
        assert_eq!(report.report_type(), "Image");
    }

    #[test]
    fn integral_float_discriminant_is_accepted() {
        assert_eq!(TaskType::from_wire(&json!(4.0)).unwrap(), TaskType::TopoMapping);
        assert!(TaskType::from_wire(&json!(4.5)).is_err());
    }

    #[test]
    fn non_numeric_discriminant_is_unknown() {
        assert!(matches!(
            TaskType::from_wire(&json!("1")),
            Err(ModelError::UnknownTaskType(_))
        ));
        assert!(matches!(
            TaskType::from_wire(&json!(-1)),
            Err(ModelError::UnknownTaskType(_))
        ));
        assert!(matches!(
            TaskType::from_wire(&json!(null)),
            Err(ModelError::MissingTaskType)
        ));
    }

    #[test]
    fn task_type_round_trips_through_u8() {
        for n in 0u8..=5 {
            assert_eq!(u8::from(TaskType::try_from(n).unwrap()), n);
        }
        assert!(TaskType::try_from(6).is_err());
    }

    #[test]
    fn display_prefixes_label_and_mission() {
        let report = Report::from_value(&json!({
            "taskType": 5,
            "missionId": 12,
            "success": true
        })).unwrap();

        assert_eq!(report.to_string(), "[Install] Mission 12 - ✓ Success");
    }

    #[test]
    fn serialize_carries_discriminant() {
        let report = Report::from_value(&json!({
            "taskType": 3,
            "missionId": 1,
            "problemId": 2,
            "repairable": true
        })).unwrap();

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["taskType"], json!(3));
        assert_eq!(value["problemId"], json!(2));
        assert_eq!(Report::from_value(&value).unwrap(), report);
    }

    #[test]
    fn ill_typed_fields_are_an_error() {
        let result = Report::from_value(&json!({ "taskType": 2, "temp": "hot" }));
        assert!(matches!(result, Err(ModelError::JsonError(_))));
    }
}
