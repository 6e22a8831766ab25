//! Report factory configuration.

use crate::report::DroppedReport;

/// A callback run whenever the factory drops a raw report.
pub type DropCallback = std::sync::Arc<dyn Fn(&DroppedReport) + Send + Sync>;

/// Configuration for a [`crate::report::ReportFactory`].
#[derive(Clone)]
pub struct FactoryConfig {
    /// Should dropped reports be written to the `log` facade.
    pub log_drops: bool,

    /// Optional hook notified of every dropped report.
    pub on_dropped: Option<DropCallback>,
}
impl FactoryConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable logging of dropped reports.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_drops = enabled;
        self
    }

    /// Set the dropped report callback.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use ground_control::config::FactoryConfig;
    ///
    /// let dropped = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&dropped);
    /// let config = FactoryConfig::new()
    ///     .with_drop_callback(move |_| { counter.fetch_add(1, Ordering::Relaxed); });
    /// ```
    pub fn with_drop_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&DroppedReport) + Send + Sync + 'static,
    {
        self.on_dropped = Some(std::sync::Arc::new(callback));
        self
    }

    /// Remove the dropped report callback.
    pub fn without_drop_callback(mut self) -> Self {
        self.on_dropped = None;
        self
    }
}
impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            log_drops: true,
            on_dropped: None,
        }
    }
}
impl std::fmt::Debug for FactoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryConfig")
            .field("log_drops", &self.log_drops)
            .field("on_dropped", &self.on_dropped.is_some())
            .finish()
    }
}
