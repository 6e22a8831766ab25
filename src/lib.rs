//! Client-side data model for rover ground-control.
//!
//! Rover telemetry snapshots, missions and typed mission reports, shaped from
//! already-deserialized wire objects.
//!
//! ```
//! use ground_control::{Mission, Summarizable};
//!
//! let mission = Mission::from_value(&serde_json::json!({
//!     "id": 1,
//!     "idRover": 2,
//!     "taskType": 5,
//!     "reports": [{ "taskType": 5, "missionId": 1, "success": true, "isLastReport": true }]
//! })).unwrap();
//!
//! let report = mission.valid_reports().next().unwrap();
//! assert_eq!(report.report_type(), "Install");
//! assert_eq!(report.summary(), "✓ Success ✓ Last");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod mission;
pub mod report;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use mission::Mission;
pub use report::{Report, ReportFactory, Summarizable, TaskType};
pub use types::{Coordinate, Rover};
