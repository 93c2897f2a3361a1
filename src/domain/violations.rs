//! Core domain models for banned-pattern issues and naming violations
//!
//! Architecture: Rich Domain Models - Reports are aggregates with behavior, not just data
//! - Issues know how to render their own diagnostic line
//! - ScanReport and NamingReport act as aggregate roots computing gate status
//! - The two reports never merge; each pass has its own independent gate

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity levels for banned-pattern rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warnings that should be addressed but don't block builds
    Warning,
    /// Errors that fail the gate
    Error,
}

impl Severity {
    /// Whether this severity level should cause the gate to fail
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Diagnostic icon used by the human report format
    pub fn icon(self) -> &'static str {
        match self {
            Self::Warning => "⚠️ ",
            Self::Error => "❌",
        }
    }
}

/// A banned-pattern match found in a scanned file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// File path where the pattern was found
    pub file_path: PathBuf,
    /// Line number (1-indexed) where the pattern occurs
    pub line_number: u32,
    /// The offending line, trimmed, for operator context
    pub line_text: String,
    /// Human-readable description from the matching rule
    pub message: String,
    /// Severity of the matching rule
    pub severity: Severity,
}

impl Issue {
    pub fn new(
        file_path: PathBuf,
        line_number: u32,
        line_text: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            file_path,
            line_number,
            line_text: line_text.into(),
            message: message.into(),
            severity,
        }
    }

    /// Whether this issue fails the gate on its own
    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }

    /// Format the diagnostic line: `<path>:<line> - <message>`
    pub fn format_display(&self) -> String {
        format!("{}:{} - {}", self.file_path.display(), self.line_number, self.message)
    }
}

/// A naming-convention violation in a DSL source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingViolation {
    /// File path where the violation was found
    pub file_path: PathBuf,
    /// Line number (1-indexed)
    pub line_number: u32,
    /// Human-readable description of the violated convention
    pub message: String,
}

impl NamingViolation {
    pub fn new(file_path: PathBuf, line_number: u32, message: impl Into<String>) -> Self {
        Self { file_path, line_number, message: message.into() }
    }
}

/// Count of issues by severity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl IssueCounts {
    /// Total number of issues across both severities
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    /// Whether there are any gate-failing issues
    pub fn has_blocking(&self) -> bool {
        self.errors > 0
    }

    /// Account for one issue
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }
}

/// Complete banned-pattern report for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// All issues, in discovery order until sorted
    pub issues: Vec<Issue>,
    /// Issue counts by severity
    pub counts: IssueCounts,
    /// Number of files scanned
    pub files_scanned: usize,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue, keeping the severity counts in step
    pub fn add_issue(&mut self, issue: Issue) {
        self.counts.add(issue.severity);
        self.issues.push(issue);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Whether the report contains gate-failing issues
    pub fn has_errors(&self) -> bool {
        self.counts.has_blocking()
    }

    pub fn set_files_scanned(&mut self, count: usize) {
        self.files_scanned = count;
    }

    /// Sort issues by file path then line number for deterministic output
    pub fn sort_issues(&mut self) {
        self.issues.sort_by(|a, b| {
            a.file_path.cmp(&b.file_path).then_with(|| a.line_number.cmp(&b.line_number))
        });
    }

    /// Process exit status: 1 iff any error-severity issue exists
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            1
        } else {
            0
        }
    }
}

/// Naming-convention report; any violation at all fails the gate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingReport {
    /// All violations found
    pub violations: Vec<NamingViolation>,
    /// Number of files checked
    pub files_checked: usize,
    /// The configured root did not exist; the check was skipped
    pub root_missing: bool,
}

impl NamingReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for an absent root: non-presence is not a failure
    pub fn skipped() -> Self {
        Self { root_missing: true, ..Self::default() }
    }

    pub fn add_violation(&mut self, violation: NamingViolation) {
        self.violations.push(violation);
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Sort violations by file path then line number for deterministic output
    pub fn sort_violations(&mut self) {
        self.violations.sort_by(|a, b| {
            a.file_path.cmp(&b.file_path).then_with(|| a.line_number.cmp(&b.line_number))
        });
    }

    /// Process exit status: no severity tiering, every violation is gate-failing
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            1
        } else {
            0
        }
    }
}

/// Error types that can occur while running the gate
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    /// Configuration values were inconsistent or unusable
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Pattern compilation failed
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// Analysis failed for a specific file
    #[error("Analysis error in {file}: {message}")]
    Analysis { file: String, message: String },
}

impl WardenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern { message: message.into() }
    }

    /// Create an analysis error
    pub fn analysis(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Analysis { file: file.into(), message: message.into() }
    }
}

/// Result type for Warden operations
pub type WardenResult<T> = Result<T, WardenError>;
