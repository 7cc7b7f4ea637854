//! Facade configuration

use super::error::{FacadeError, Result};
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Threshold, tag allow-list and default observer switch.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```
/// use rust_log_facade::{FacadeConfig, Severity};
///
/// let config = FacadeConfig::from_json(r#"{"threshold": "info", "tag_filter": ["NET"]}"#).unwrap();
/// assert_eq!(config.threshold, Severity::Info);
/// assert!(config.admits_tag("NET"));
/// assert!(!config.admits_tag(""));
/// assert!(config.default_observer_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub threshold: Severity,
    pub tag_filter: BTreeSet<String>,
    pub default_observer_enabled: bool,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::default_threshold(),
            tag_filter: BTreeSet::new(),
            default_observer_enabled: true,
        }
    }
}

impl FacadeConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FacadeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject an allow-list containing the empty tag, which can never match
    pub fn validate(&self) -> Result<()> {
        if self.tag_filter.contains("") {
            return Err(FacadeError::config(
                "tag_filter",
                "empty tag can never match",
            ));
        }
        Ok(())
    }

    /// Severity stage of the filter pipeline
    #[inline]
    pub fn admits_severity(&self, severity: Severity) -> bool {
        severity.rank() >= self.threshold.rank()
    }

    /// Tag stage of the filter pipeline.
    ///
    /// An empty allow-list admits everything. Otherwise untagged messages
    /// are rejected and the tag must be listed.
    pub fn admits_tag(&self, tag: &str) -> bool {
        if self.tag_filter.is_empty() {
            return true;
        }
        if tag.is_empty() {
            return false;
        }
        self.tag_filter.contains(tag)
    }
}
