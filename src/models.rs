//! Shared data models for check results and diagnostics.
//!
//! The severity vocabulary is fixed to `error` and `warning`; the display
//! strings feed directly into the diagnostic output format consumed by
//! downstream tooling, so they must never change.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Diagnostic severity. `Error` marks a line tlog would reject or
/// misread; `Warning` marks accepted-but-suspicious input.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Stable display string used in rendered diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single diagnostic tied to one configuration line.
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based line number in the configuration file.
    pub line: usize,
    /// The trimmed line text the diagnostic refers to.
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    /// Convenience constructor for an `error` diagnostic.
    pub fn error(line: usize, context: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            context: context.to_string(),
            message: message.into(),
        }
    }

    /// Convenience constructor for a `warning` diagnostic.
    pub fn warning(line: usize, context: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            line,
            context: context.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Aggregated check summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    /// Significant (non-blank, non-comment) lines scanned.
    pub lines: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Check results container: diagnostics in scan order plus a summary.
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}
