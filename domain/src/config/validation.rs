//! Configuration validation results.
//!
//! Settings and file configuration report problems as a list of
//! [`ConfigIssue`]s instead of failing on the first one, so the CLI can
//! print every issue and only abort on [`Severity::Error`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric field is outside its accepted range.
    OutOfRange { field: String },
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A string field does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// The producer is also the selection fallback.
    ProducerIsDefault,
    /// A required connection setting is missing.
    MissingSetting { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Whether any issue in the list is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}
