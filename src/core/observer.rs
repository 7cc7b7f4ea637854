//! Observer trait for log destinations

use super::{log_record::LogRecord, severity::Severity};

/// Receives every record that passes the facade's filters.
///
/// `notify` runs on the emitting thread with no facade lock held, so an
/// observer may log through the same facade. Return values are not
/// consumed; a panic is caught by the facade and does not affect other
/// observers.
pub trait Observer: Send + Sync {
    fn notify(&self, record: &LogRecord, tag: &str, severity: Severity);

    fn name(&self) -> &str {
        "observer"
    }
}

impl<F> Observer for F
where
    F: Fn(&LogRecord, &str, Severity) + Send + Sync,
{
    fn notify(&self, record: &LogRecord, tag: &str, severity: Severity) {
        self(record, tag, severity)
    }

    fn name(&self) -> &str {
        "closure"
    }
}
