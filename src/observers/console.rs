//! Console observer implementation

use crate::core::{LogRecord, Observer, Severity};
use chrono::format::{Item, StrftimeItems};
use colored::Colorize;
use std::fmt::Write as _;
use std::io::Write;

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Built-in default observer: one line per record on stderr.
///
/// Rendering never fails toward the facade; write errors are ignored.
pub struct ConsoleObserver {
    use_colors: bool,
    show_origin: bool,
    timestamp_format: String,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            show_origin: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Include `file:line function` in each line
    #[must_use]
    pub fn with_origin(mut self, show_origin: bool) -> Self {
        self.show_origin = show_origin;
        self
    }

    /// Set a strftime-compatible timestamp format
    ///
    /// A format chrono cannot parse is ignored and the current one is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_log_facade::observers::ConsoleObserver;
    ///
    /// let observer = ConsoleObserver::new().with_timestamp_format("%H:%M:%S");
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format_str: &str) -> Self {
        if Self::is_valid_timestamp_format(format_str) {
            self.timestamp_format = format_str.to_string();
        }
        self
    }

    fn is_valid_timestamp_format(format_str: &str) -> bool {
        !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
    }

    /// Format the record's timestamp, falling back to the default format if
    /// the configured one fails
    fn format_timestamp(&self, record: &LogRecord) -> String {
        let mut timestamp = String::new();
        if write!(timestamp, "{}", record.timestamp().format(&self.timestamp_format)).is_err() {
            timestamp.clear();
            let _ = write!(
                timestamp,
                "{}",
                record.timestamp().format(DEFAULT_TIMESTAMP_FORMAT)
            );
        }
        timestamp
    }

    /// Replace newlines, carriage returns and tabs with escape sequences so
    /// one record always renders as one line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Render a record as a single line of text
    pub fn render(&self, record: &LogRecord, tag: &str, severity: Severity) -> String {
        let level_str = if self.use_colors {
            format!("{:7}", severity.to_str())
                .color(severity.color_code())
                .to_string()
        } else {
            format!("{:7}", severity.to_str())
        };

        let mut line = format!("[{}] [{}]", self.format_timestamp(record), level_str);

        if !tag.is_empty() {
            line.push_str(&format!(" [{}]", tag));
        }

        if self.show_origin {
            let origin = record.origin();
            line.push_str(&format!(
                " {}:{} {}",
                origin.file,
                origin.line,
                origin.short_function()
            ));
        }

        line.push_str(" - ");
        line.push_str(&Self::sanitize_message(record.message()));
        line
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ConsoleObserver {
    fn notify(&self, record: &LogRecord, tag: &str, severity: Severity) {
        let output = self.render(record, tag, severity);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", output);
    }

    fn name(&self) -> &str {
        "console"
    }
}
