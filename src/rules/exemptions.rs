//! Path-scoped severity exemptions
//!
//! Architecture: Anti-Corruption Layer - exemptions translate path shapes into
//! the set of severities the engine must not enforce for that file
//! - Resolution is a pure function of the file path, never of file content
//! - Every matching entry contributes; allowed-severity sets are unioned,
//!   not first-matched

use crate::domain::violations::{Severity, WardenError, WardenResult};
use regex::Regex;
use std::path::Path;

/// Set of severities a file is exempted from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeveritySet {
    errors: bool,
    warnings: bool,
}

impl SeveritySet {
    /// The empty set: every severity is enforced
    pub fn none() -> Self {
        Self::default()
    }

    /// The full set: nothing is enforced
    pub fn all() -> Self {
        Self { errors: true, warnings: true }
    }

    /// Build a set from individual severities
    pub fn of(severities: &[Severity]) -> Self {
        let mut set = Self::none();
        for severity in severities {
            set.insert(*severity);
        }
        set
    }

    pub fn insert(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors = true,
            Severity::Warning => self.warnings = true,
        }
    }

    /// Whether issues of this severity are exempted
    pub fn allows(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
        }
    }

    /// Union another set into this one
    pub fn union_with(&mut self, other: SeveritySet) {
        self.errors |= other.errors;
        self.warnings |= other.warnings;
    }

    pub fn is_empty(&self) -> bool {
        !self.errors && !self.warnings
    }
}

/// One path pattern paired with the severities it relaxes
///
/// A pattern matches a file when it occurs as a plain substring of the path
/// or when it matches as a regular expression, whichever hits first.
#[derive(Debug, Clone)]
pub struct ExemptionEntry {
    raw: String,
    regex: Regex,
    allowed: SeveritySet,
}

impl ExemptionEntry {
    pub fn new(pattern: impl Into<String>, allowed: SeveritySet) -> WardenResult<Self> {
        let raw = pattern.into();
        let regex = Regex::new(&raw)
            .map_err(|e| WardenError::pattern(format!("Invalid exemption pattern '{raw}': {e}")))?;
        Ok(Self { raw, regex, allowed })
    }

    /// Whether this entry applies to the given path
    pub fn matches(&self, path_str: &str) -> bool {
        path_str.contains(self.raw.as_str()) || self.regex.is_match(path_str)
    }

    pub fn allowed_severities(&self) -> SeveritySet {
        self.allowed
    }
}

/// Ordered table of exemption entries, resolved per file
#[derive(Debug, Clone, Default)]
pub struct ExemptionIndex {
    entries: Vec<ExemptionEntry>,
}

impl ExemptionIndex {
    pub fn new(entries: Vec<ExemptionEntry>) -> Self {
        Self { entries }
    }

    /// The compiled-in exemption table for the workspace layout
    pub fn defaults() -> WardenResult<Self> {
        let entries = vec![
            // Runtime code allows panics and unwraps (OOM, FFI boundaries)
            ExemptionEntry::new("runtime", SeveritySet::of(&[Severity::Error]))?,
            // Legacy crates still carry unwrap-heavy internals
            ExemptionEntry::new("codegen", SeveritySet::of(&[Severity::Error]))?,
            ExemptionEntry::new("syntax", SeveritySet::of(&[Severity::Error]))?,
            ExemptionEntry::new("driver", SeveritySet::of(&[Severity::Error]))?,
            // Diagnostics writes to the console directly
            ExemptionEntry::new("diagnostics", SeveritySet::of(&[Severity::Warning]))?,
            // Test code is fully relaxed in every shape it appears
            ExemptionEntry::new("tests.rs", SeveritySet::all())?,
            ExemptionEntry::new("test.rs", SeveritySet::all())?,
            ExemptionEntry::new("/tests/", SeveritySet::all())?,
            ExemptionEntry::new("/test_", SeveritySet::all())?,
            // DSL sources carry none of the banned host-language idioms
            ExemptionEntry::new(r"\.dsl$", SeveritySet::all())?,
        ];

        Ok(Self::new(entries))
    }

    /// Union of all matching entries' allowed-severity sets for this path
    pub fn resolve(&self, path: &Path) -> SeveritySet {
        let path_str = path.to_string_lossy();
        let mut allowed = SeveritySet::none();

        for entry in &self.entries {
            if entry.matches(&path_str) {
                allowed.union_with(entry.allowed_severities());
            }
        }

        allowed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
