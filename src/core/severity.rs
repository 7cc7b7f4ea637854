//! Severity level definitions

use super::error::FacadeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Verbose = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
}

impl Severity {
    /// Every severity, least important first
    pub const ALL: [Severity; 5] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Numeric rank used for threshold comparison
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Threshold a facade starts with.
    ///
    /// Debug builds admit `Debug` and above, release builds only `Warning`
    /// and above.
    pub const fn default_threshold() -> Self {
        if cfg!(debug_assertions) {
            Severity::Debug
        } else {
            Severity::Warning
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Verbose => BrightBlack,
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warning => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VERBOSE" | "V" | "TRACE" => Ok(Severity::Verbose),
            "DEBUG" | "D" => Ok(Severity::Debug),
            "INFO" | "I" => Ok(Severity::Info),
            "WARNING" | "WARN" | "W" => Ok(Severity::Warning),
            "ERROR" | "E" => Ok(Severity::Error),
            _ => Err(FacadeError::InvalidSeverity(s.to_string())),
        }
    }
}
