//! Main facade implementation
//!
//! Configuration and the observer registry share one lock. Emitting holds
//! the read lock only while running the filters and copying the registry;
//! observers are notified with no lock held.

use super::{
    config::FacadeConfig,
    guard::{Registration, ThresholdGuard},
    log_record::LogRecord,
    metrics::FacadeMetrics,
    observer::Observer,
    origin::Origin,
    payload::Payload,
    registry::ObserverRegistry,
    severity::Severity,
};
use crate::observers::ConsoleObserver;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

struct FacadeState {
    config: FacadeConfig,
    observers: ObserverRegistry,
}

pub struct Facade {
    state: RwLock<FacadeState>,
    default_observer: Arc<dyn Observer>,
    metrics: FacadeMetrics,
}

impl Facade {
    /// Facade with the default configuration and a console default observer
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FacadeConfig::default())
    }

    #[must_use]
    pub fn with_config(config: FacadeConfig) -> Self {
        Self::from_parts(config, Arc::new(ConsoleObserver::new()), ObserverRegistry::new())
    }

    fn from_parts(
        config: FacadeConfig,
        default_observer: Arc<dyn Observer>,
        observers: ObserverRegistry,
    ) -> Self {
        Self {
            state: RwLock::new(FacadeState { config, observers }),
            default_observer,
            metrics: FacadeMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder() -> FacadeBuilder {
        FacadeBuilder::new()
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn set_threshold(&self, level: Severity) {
        self.state.write().config.threshold = level;
    }

    pub fn threshold(&self) -> Severity {
        self.state.read().config.threshold
    }

    /// Replace the tag allow-list. An empty list admits every tag.
    pub fn set_tag_filter<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        self.state.write().config.tag_filter = tags;
    }

    pub fn tag_filter(&self) -> BTreeSet<String> {
        self.state.read().config.tag_filter.clone()
    }

    pub fn set_default_observer_enabled(&self, enabled: bool) {
        self.state.write().config.default_observer_enabled = enabled;
    }

    pub fn is_default_observer_enabled(&self) -> bool {
        self.state.read().config.default_observer_enabled
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> FacadeConfig {
        self.state.read().config.clone()
    }

    /// Replace the whole configuration at once
    pub fn configure(&self, config: FacadeConfig) {
        self.state.write().config = config;
    }

    /// Set the threshold until the returned guard is dropped
    #[must_use = "the previous threshold is restored when the guard is dropped"]
    pub fn scoped_threshold(&self, level: Severity) -> ThresholdGuard<'_> {
        let previous = {
            let mut state = self.state.write();
            std::mem::replace(&mut state.config.threshold, level)
        };
        ThresholdGuard::new(self, previous)
    }

    // ------------------------------------------------------------------
    // Observer registry
    // ------------------------------------------------------------------

    /// Append an observer. Registering the same instance twice notifies it
    /// twice per message.
    pub fn register(&self, observer: Arc<dyn Observer>) {
        self.state.write().observers.register(observer);
    }

    /// Remove every registration of `observer`, returning how many there were
    pub fn unregister<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> usize {
        self.state.write().observers.unregister(observer)
    }

    /// Remove the most recent registration of `observer` only
    pub(crate) fn unregister_last<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.state.write().observers.unregister_last(observer)
    }

    pub fn contains<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.state.read().observers.contains(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.state.read().observers.len()
    }

    /// Register an observer until the returned guard is dropped
    #[must_use = "the observer is unregistered when the guard is dropped"]
    pub fn register_scoped(&self, observer: Arc<dyn Observer>) -> Registration<'_> {
        self.register(Arc::clone(&observer));
        Registration::new(self, observer)
    }

    // ------------------------------------------------------------------
    // Emit
    // ------------------------------------------------------------------

    /// Whether a message with this severity and tag would reach observers
    pub fn would_emit(&self, severity: Severity, tag: &str) -> bool {
        let state = self.state.read();
        state.config.admits_severity(severity) && state.config.admits_tag(tag)
    }

    /// Run the filter pipeline and, on pass, notify the default observer
    /// (when enabled) followed by every registered observer in order.
    pub fn emit(
        &self,
        message: impl Into<String>,
        severity: Severity,
        tag: &str,
        payload: Payload,
        origin: Origin,
    ) {
        let (notify_default, observers) = {
            let state = self.state.read();
            if !state.config.admits_severity(severity) {
                self.metrics.record_severity_filtered();
                return;
            }
            if !state.config.admits_tag(tag) {
                self.metrics.record_tag_filtered();
                return;
            }
            (state.config.default_observer_enabled, state.observers.snapshot())
        };

        let record = LogRecord::new(message, origin, payload);

        if notify_default {
            self.notify_isolated(None, &self.default_observer, &record, tag, severity);
        }
        for (idx, observer) in observers.iter().enumerate() {
            self.notify_isolated(Some(idx), observer, &record, tag, severity);
        }

        self.metrics.record_dispatched();
    }

    /// Notify one observer, containing any panic so the fan-out continues
    fn notify_isolated(
        &self,
        idx: Option<usize>,
        observer: &Arc<dyn Observer>,
        record: &LogRecord,
        tag: &str,
        severity: Severity,
    ) {
        let result = catch_unwind(AssertUnwindSafe(|| observer.notify(record, tag, severity)));

        if let Err(panic_info) = result {
            self.metrics.record_observer_failure();
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            let slot = match idx {
                Some(idx) => format!("#{}", idx),
                None => "default".to_string(),
            };
            eprintln!(
                "[FACADE CRITICAL] Observer {} ({}) panicked: {}. \
                 Other observers continue to function.",
                slot,
                observer.name(),
                panic_msg
            );
        }
    }

    pub fn verbose(&self, message: impl Into<String>, tag: &str, payload: Payload, origin: Origin) {
        self.emit(message, Severity::Verbose, tag, payload, origin);
    }

    pub fn debug(&self, message: impl Into<String>, tag: &str, payload: Payload, origin: Origin) {
        self.emit(message, Severity::Debug, tag, payload, origin);
    }

    pub fn info(&self, message: impl Into<String>, tag: &str, payload: Payload, origin: Origin) {
        self.emit(message, Severity::Info, tag, payload, origin);
    }

    pub fn warning(&self, message: impl Into<String>, tag: &str, payload: Payload, origin: Origin) {
        self.emit(message, Severity::Warning, tag, payload, origin);
    }

    pub fn error(&self, message: impl Into<String>, tag: &str, payload: Payload, origin: Origin) {
        self.emit(message, Severity::Error, tag, payload, origin);
    }

    pub fn metrics(&self) -> &FacadeMetrics {
        &self.metrics
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Facade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Facade")
            .field("config", &state.config)
            .field("observers", &state.observers)
            .field("default_observer", &self.default_observer.name())
            .finish()
    }
}

/// Builder for constructing a [`Facade`] with custom configuration
///
/// # Example
///
/// ```
/// use rust_log_facade::{Facade, Severity};
///
/// let facade = Facade::builder()
///     .threshold(Severity::Info)
///     .tag_filter(["NET", "DB"])
///     .default_observer_enabled(false)
///     .build();
///
/// assert_eq!(facade.threshold(), Severity::Info);
/// assert!(facade.would_emit(Severity::Error, "NET"));
/// assert!(!facade.would_emit(Severity::Error, "UI"));
/// ```
pub struct FacadeBuilder {
    config: FacadeConfig,
    default_observer: Option<Arc<dyn Observer>>,
    observers: ObserverRegistry,
}

impl FacadeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FacadeConfig::default(),
            default_observer: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Start from a complete configuration
    #[must_use]
    pub fn config(mut self, config: FacadeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: Severity) -> Self {
        self.config.threshold = level;
        self
    }

    #[must_use]
    pub fn tag_filter<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tag_filter = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn default_observer_enabled(mut self, enabled: bool) -> Self {
        self.config.default_observer_enabled = enabled;
        self
    }

    /// Replace the built-in console observer
    #[must_use]
    pub fn default_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.default_observer = Some(observer);
        self
    }

    /// Register an observer on the facade being built
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observers.register(observer);
        self
    }

    pub fn build(self) -> Facade {
        let default_observer = self
            .default_observer
            .unwrap_or_else(|| Arc::new(ConsoleObserver::new()));
        Facade::from_parts(self.config, default_observer, self.observers)
    }
}

impl Default for FacadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
