//! Call-site metadata attached to every record

use serde::Serialize;
use std::fmt;

/// Function name recorded when the call site cannot provide one
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Where a log call was made.
///
/// Usually produced by the [`origin!`](crate::origin) macro, which fills in
/// the file, enclosing function, line and column of the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Origin {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Origin {
    pub const fn new(file: &'static str, function: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            function,
            line,
            column,
        }
    }

    /// Capture the location of the caller through `#[track_caller]`.
    ///
    /// Rust does not expose the calling function's name this way, so
    /// `function` is [`UNKNOWN_FUNCTION`].
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(
            location.file(),
            UNKNOWN_FUNCTION,
            location.line(),
            location.column(),
        )
    }

    /// Last path component of the enclosing function, e.g. `handle` for
    /// `my_crate::server::handle`
    pub fn short_function(&self) -> &'static str {
        self.function.rsplit("::").next().unwrap_or(self.function)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{} ({})", self.file, self.line, self.column, self.function)
    }
}
