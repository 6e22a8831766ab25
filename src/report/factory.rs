//! Discriminated report construction.
//! Raw reports that cannot be dispatched are dropped rather than failing,
//! with an optional hook for callers that want to know about them.

use crate::config::FactoryConfig;
use crate::error::ModelError;
use crate::report::Report;

/// Why a raw report was dropped.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DropReason {
    /// The raw entry was null.
    #[error("report entry is null")]
    MissingRecord,

    /// The raw entry had no (or a null) `taskType`.
    #[error("report has no taskType")]
    MissingTaskType,

    /// The `taskType` is not a known task.
    #[error("unknown taskType {0}")]
    UnknownTaskType(String),

    /// The `taskType` is known but the fields could not be read.
    #[error("malformed report: {0}")]
    Malformed(String),
}
impl From<ModelError> for DropReason {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingTaskType => Self::MissingTaskType,
            ModelError::UnknownTaskType(tag) => Self::UnknownTaskType(tag),
            ModelError::JsonError(e) => Self::Malformed(e.to_string()),
        }
    }
}

/// A notification for a dropped report.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedReport {
    /// Position of the entry within its mission, if built as part of one.
    pub index: Option<usize>,

    /// Why the entry was dropped.
    pub reason: DropReason,
}

/// Builds typed reports from raw wire objects.
#[derive(Debug, Clone, Default)]
pub struct ReportFactory {
    config: FactoryConfig,
}
impl ReportFactory {
    /// Create a factory using the given configuration.
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    /// Build a report, or `None` if the raw value can't be dispatched.
    pub fn instantiate(&self, raw: &serde_json::Value) -> Option<Report> {
        self.dispatch(None, raw)
    }

    /// Build every entry of a mission's raw report list.
    /// Length and order are preserved, undispatchable entries become `None`.
    pub fn instantiate_all(&self, raw: &[serde_json::Value]) -> Vec<Option<Report>> {
        raw.iter()
            .enumerate()
            .map(|(index, entry)| self.dispatch(Some(index), entry))
            .collect()
    }

    fn dispatch(&self, index: Option<usize>, raw: &serde_json::Value) -> Option<Report> {
        let result = if raw.is_null() {
            Err(DropReason::MissingRecord)
        } else {
            Report::from_value(raw).map_err(DropReason::from)
        };

        match result {
            Ok(report) => Some(report),
            Err(reason) => {
                self.notify(DroppedReport { index, reason });
                None
            }
        }
    }

    fn notify(&self, dropped: DroppedReport) {
        if self.config.log_drops {
            match dropped.reason {
                DropReason::MissingRecord | DropReason::MissingTaskType => {
                    log::debug!("Dropped report {:?}: {}", dropped.index, dropped.reason);
                }
                DropReason::UnknownTaskType(_) | DropReason::Malformed(_) => {
                    log::warn!("Dropped report {:?}: {}", dropped.index, dropped.reason);
                }
            }
        }

        if let Some(callback) = &self.config.on_dropped {
            callback(&dropped);
        }
    }
}
