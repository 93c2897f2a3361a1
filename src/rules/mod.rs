//! Banned-pattern rule table and line matchers
//!
//! Architecture: Service Layer - the rule table is data, matching is polymorphic
//! - Each rule is a tagged record {matcher, message, severity}
//! - Matchers hide their strategy (substring scan or compiled regex) behind one
//!   predicate, so strategies are interchangeable without touching the engine
//! - The table is built once at startup and treated as read-only afterwards

pub mod exemptions;

pub use exemptions::{ExemptionEntry, ExemptionIndex, SeveritySet};

use crate::domain::violations::{Severity, WardenError, WardenResult};
use regex::Regex;

/// An opaque line predicate backing one rule
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Plain substring containment, for tokens regex adds nothing to
    Substring(String),
    /// Compiled regular expression, for word-boundary sensitive tokens
    Regex(Regex),
}

impl Matcher {
    /// Build a substring matcher
    pub fn substring(token: impl Into<String>) -> Self {
        Self::Substring(token.into())
    }

    /// Build a compiled-regex matcher
    pub fn regex(pattern: &str) -> WardenResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| WardenError::pattern(format!("Invalid regex '{pattern}': {e}")))?;
        Ok(Self::Regex(regex))
    }

    /// Test the predicate against a single line of text
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Substring(token) => line.contains(token.as_str()),
            Self::Regex(regex) => regex.is_match(line),
        }
    }
}

/// A single banned-pattern rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Line predicate that decides whether the rule fires
    pub matcher: Matcher,
    /// Human-readable message attached to every issue this rule emits
    pub message: String,
    /// Severity attached to every issue this rule emits
    pub severity: Severity,
}

impl Rule {
    pub fn new(matcher: Matcher, message: impl Into<String>, severity: Severity) -> Self {
        Self { matcher, message: message.into(), severity }
    }
}

/// Immutable ordered list of banned-pattern rules
///
/// Rule order is significant: issues on one line are emitted in table order,
/// and the report relies on that for stable output.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The compiled-in rule table enforced by the gate
    pub fn defaults() -> WardenResult<Self> {
        let rules = vec![
            Rule::new(
                Matcher::substring(".unwrap()"),
                "Avoid `.unwrap()` in production code. Use `?` or `match`.",
                Severity::Error,
            ),
            Rule::new(
                Matcher::substring(".expect("),
                "Avoid `.expect()` in production code. Use proper error handling.",
                Severity::Error,
            ),
            Rule::new(
                Matcher::regex(r"\bpanic!\(")?,
                "Avoid `panic!()`. Return `Result` instead.",
                Severity::Error,
            ),
            Rule::new(
                Matcher::regex(r"\bprintln!\(")?,
                "Avoid `println!()` in library code. Use proper logging or diagnostics.",
                Severity::Warning,
            ),
            Rule::new(
                Matcher::regex(r"\btodo!\(")?,
                "Found unfinished code `todo!()`.",
                Severity::Error,
            ),
            Rule::new(
                Matcher::regex(r"\bdbg!\(")?,
                "Found debug macro `dbg!()`.",
                Severity::Error,
            ),
        ];

        Ok(Self::new(rules))
    }

    /// Iterate rules in table order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
