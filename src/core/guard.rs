//! RAII guards for scoped facade changes
//!
//! - `Registration`: unregisters an observer when dropped
//! - `ThresholdGuard`: restores the previous threshold when dropped

use super::{facade::Facade, observer::Observer, severity::Severity};
use std::sync::Arc;

/// Keeps an observer registered for the lifetime of the guard
///
/// # Example
///
/// ```
/// use rust_log_facade::{Facade, LogRecord, Observer, Severity};
/// use std::sync::Arc;
///
/// let facade = Facade::builder().default_observer_enabled(false).build();
/// let observer: Arc<dyn Observer> = Arc::new(|_: &LogRecord, _: &str, _: Severity| {});
///
/// {
///     let _registration = facade.register_scoped(observer.clone());
///     assert!(facade.contains(&observer));
/// }
/// assert!(!facade.contains(&observer));
/// ```
///
/// Dropping the guard removes only the entry it added; registrations of the
/// same instance made outside the guard stay in place.
pub struct Registration<'a> {
    facade: &'a Facade,
    observer: Arc<dyn Observer>,
}

impl<'a> Registration<'a> {
    pub(crate) fn new(facade: &'a Facade, observer: Arc<dyn Observer>) -> Self {
        Self { facade, observer }
    }

    pub fn observer(&self) -> &Arc<dyn Observer> {
        &self.observer
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.facade.unregister_last(&self.observer);
    }
}

/// Restores the threshold that was active before
/// [`Facade::scoped_threshold`] was called
pub struct ThresholdGuard<'a> {
    facade: &'a Facade,
    previous: Severity,
}

impl<'a> ThresholdGuard<'a> {
    pub(crate) fn new(facade: &'a Facade, previous: Severity) -> Self {
        Self { facade, previous }
    }

    pub fn previous(&self) -> Severity {
        self.previous
    }
}

impl Drop for ThresholdGuard<'_> {
    fn drop(&mut self) {
        self.facade.set_threshold(self.previous);
    }
}
