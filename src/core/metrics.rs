//! Facade metrics for observability
//!
//! Counts how emitted messages were handled: dispatched to observers,
//! rejected by the severity threshold, rejected by the tag filter, and how
//! many individual observer calls panicked.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what the facade did with emitted messages
///
/// # Example
///
/// ```
/// use rust_log_facade::FacadeMetrics;
///
/// let metrics = FacadeMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_severity_filtered();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.severity_filtered(), 1);
/// assert_eq!(metrics.filter_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct FacadeMetrics {
    /// Messages that passed every filter and were fanned out
    dispatched: AtomicU64,

    /// Messages discarded by the severity threshold
    severity_filtered: AtomicU64,

    /// Messages discarded by the tag allow-list
    tag_filtered: AtomicU64,

    /// Observer calls that panicked
    observer_failures: AtomicU64,
}

impl FacadeMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            severity_filtered: AtomicU64::new(0),
            tag_filtered: AtomicU64::new(0),
            observer_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn severity_filtered(&self) -> u64 {
        self.severity_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn tag_filtered(&self) -> u64 {
        self.tag_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn observer_failures(&self) -> u64 {
        self.observer_failures.load(Ordering::Relaxed)
    }

    /// Record a dispatched message, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_severity_filtered(&self) -> u64 {
        self.severity_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_tag_filtered(&self) -> u64 {
        self.tag_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_observer_failure(&self) -> u64 {
        self.observer_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emitted messages discarded by either filter, as a percentage
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn filter_rate(&self) -> f64 {
        let filtered = (self.severity_filtered() + self.tag_filtered()) as f64;
        let total = self.dispatched() as f64 + filtered;
        if total == 0.0 {
            0.0
        } else {
            (filtered / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.severity_filtered.store(0, Ordering::Relaxed);
        self.tag_filtered.store(0, Ordering::Relaxed);
        self.observer_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for FacadeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FacadeMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            severity_filtered: AtomicU64::new(self.severity_filtered()),
            tag_filtered: AtomicU64::new(self.tag_filtered()),
            observer_failures: AtomicU64::new(self.observer_failures()),
        }
    }
}
