//! Report generation for both scan passes
//!
//! Architecture: Anti-Corruption Layer - formatters translate domain objects
//! to external representations
//! - ScanReport and NamingReport are converted to human or JSON output
//! - Exit-status computation stays on the domain aggregates; formatting never
//!   changes what the gate decides

use crate::domain::violations::{NamingReport, ScanReport, Severity, WardenError, WardenResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with icons and source excerpts
    Human,
    /// JSON format for programmatic consumption
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for the human format)
    pub use_colors: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Formatter dispatching domain reports to the requested representation
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a banned-pattern report
    pub fn format_scan_report(
        &self,
        report: &ScanReport,
        format: OutputFormat,
    ) -> WardenResult<String> {
        match format {
            OutputFormat::Human => Ok(self.scan_report_human(report)),
            OutputFormat::Json => scan_report_json(report),
        }
    }

    /// Format a naming-convention report
    pub fn format_naming_report(
        &self,
        report: &NamingReport,
        format: OutputFormat,
    ) -> WardenResult<String> {
        match format {
            OutputFormat::Human => Ok(self.naming_report_human(report)),
            OutputFormat::Json => naming_report_json(report),
        }
    }

    fn scan_report_human(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        if report.has_issues() {
            output.push_str("Found issues:\n");
            for issue in &report.issues {
                let line = format!("{} {}", issue.severity.icon(), issue.format_display());
                if self.options.use_colors {
                    let color = severity_color(issue.severity);
                    output.push_str(&format!("\x1b[{color}m{line}\x1b[0m\n"));
                } else {
                    output.push_str(&line);
                    output.push('\n');
                }
                output.push_str(&format!("    Code: {}\n", issue.line_text));
            }
            output.push('\n');
        }

        output.push_str(&self.scan_summary(report));
        output
    }

    /// Trailing summary line deciding how the run reads at a glance
    fn scan_summary(&self, report: &ScanReport) -> String {
        let (icon, color, text) = if report.counts.errors > 0 {
            (
                "❌",
                "31",
                format!("Failed: Found {} code pattern violations.", report.counts.errors),
            )
        } else if report.counts.warnings > 0 {
            ("⚠️ ", "33", format!("Passed with {} warnings.", report.counts.warnings))
        } else {
            ("✅", "32", "No banned code patterns found.".to_string())
        };

        if self.options.use_colors {
            format!("{icon} \x1b[{color}m{text}\x1b[0m\n")
        } else {
            format!("{icon} {text}\n")
        }
    }

    fn naming_report_human(&self, report: &NamingReport) -> String {
        if report.root_missing {
            return "Skipping naming check: configured root not found\n".to_string();
        }

        if !report.has_violations() {
            return if self.options.use_colors {
                "✅ \x1b[32mNaming checks passed.\x1b[0m\n".to_string()
            } else {
                "✅ Naming checks passed.\n".to_string()
            };
        }

        let mut output = String::new();
        if self.options.use_colors {
            output.push_str("❌ \x1b[31mNaming convention errors:\x1b[0m\n");
        } else {
            output.push_str("❌ Naming convention errors:\n");
        }

        // Group by file for readability; BTreeMap keeps path order stable
        let mut by_file: BTreeMap<&Path, Vec<(u32, &str)>> = BTreeMap::new();
        for v in &report.violations {
            by_file.entry(&v.file_path).or_default().push((v.line_number, &v.message));
        }

        for (path, violations) in by_file {
            output.push_str(&format!("  {}:\n", path.display()));
            for (line, message) in violations {
                output.push_str(&format!("    L{line}: {message}\n"));
            }
        }

        output
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "31",
        Severity::Warning => "33",
    }
}

fn scan_report_json(report: &ScanReport) -> WardenResult<String> {
    let issues: Vec<JsonValue> = report
        .issues
        .iter()
        .map(|i| {
            serde_json::json!({
                "file_path": i.file_path.display().to_string(),
                "line_number": i.line_number,
                "line_text": i.line_text,
                "message": i.message,
                "severity": i.severity.as_str(),
            })
        })
        .collect();

    let json_report = serde_json::json!({
        "issues": issues,
        "summary": {
            "errors": report.counts.errors,
            "warnings": report.counts.warnings,
            "files_scanned": report.files_scanned,
        },
    });

    serde_json::to_string_pretty(&json_report)
        .map(|s| s + "\n")
        .map_err(|e| WardenError::config(format!("JSON serialization failed: {e}")))
}

fn naming_report_json(report: &NamingReport) -> WardenResult<String> {
    let violations: Vec<JsonValue> = report
        .violations
        .iter()
        .map(|v| {
            serde_json::json!({
                "file_path": v.file_path.display().to_string(),
                "line_number": v.line_number,
                "message": v.message,
            })
        })
        .collect();

    let json_report = serde_json::json!({
        "violations": violations,
        "files_checked": report.files_checked,
        "skipped": report.root_missing,
    });

    serde_json::to_string_pretty(&json_report)
        .map(|s| s + "\n")
        .map_err(|e| WardenError::config(format!("JSON serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violations::{Issue, NamingViolation};
    use std::path::PathBuf;

    fn plain_formatter() -> ReportFormatter {
        ReportFormatter::new(ReportOptions { use_colors: false })
    }

    fn sample_scan_report() -> ScanReport {
        let mut report = ScanReport::new();
        report.add_issue(Issue::new(
            PathBuf::from("crates/core/src/lib.rs"),
            12,
            "let v = probe().unwrap();",
            "Avoid `.unwrap()` in production code. Use `?` or `match`.",
            Severity::Error,
        ));
        report.add_issue(Issue::new(
            PathBuf::from("crates/core/src/fmt.rs"),
            3,
            "println!(\"{v}\");",
            "Avoid `println!()` in library code.",
            Severity::Warning,
        ));
        report.set_files_scanned(5);
        report
    }

    #[test]
    fn test_human_scan_report_contract() {
        let output = plain_formatter()
            .format_scan_report(&sample_scan_report(), OutputFormat::Human)
            .unwrap();

        assert!(output.contains("❌ crates/core/src/lib.rs:12 - Avoid `.unwrap()`"));
        assert!(output.contains("    Code: let v = probe().unwrap();"));
        assert!(output.contains("⚠️  crates/core/src/fmt.rs:3 -"));
        assert!(output.contains("Failed: Found 1 code pattern violations."));
    }

    #[test]
    fn test_human_scan_report_warning_only_summary() {
        let mut report = ScanReport::new();
        report.add_issue(Issue::new(
            PathBuf::from("a.rs"),
            1,
            "println!(\"x\");",
            "Avoid `println!()` in library code.",
            Severity::Warning,
        ));

        let output =
            plain_formatter().format_scan_report(&report, OutputFormat::Human).unwrap();
        assert!(output.contains("Passed with 1 warnings."));
    }

    #[test]
    fn test_human_scan_report_clean_pass() {
        let output = plain_formatter()
            .format_scan_report(&ScanReport::new(), OutputFormat::Human)
            .unwrap();
        assert!(output.contains("✅ No banned code patterns found."));
        assert!(!output.contains("Found issues:"));
    }

    #[test]
    fn test_json_scan_report() {
        let output = plain_formatter()
            .format_scan_report(&sample_scan_report(), OutputFormat::Json)
            .unwrap();

        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["issues"].as_array().unwrap().len(), 2);
        assert_eq!(json["issues"][0]["severity"], "error");
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["summary"]["warnings"], 1);
        assert_eq!(json["summary"]["files_scanned"], 5);
    }

    #[test]
    fn test_human_naming_report_groups_by_file() {
        let mut report = NamingReport::new();
        report.add_violation(NamingViolation::new(
            PathBuf::from("dsl/lexer.dsl"),
            4,
            "Function name 'NextToken' should be snake_case",
        ));
        report.add_violation(NamingViolation::new(
            PathBuf::from("dsl/lexer.dsl"),
            9,
            "Struct name 'token' should be PascalCase",
        ));

        let output =
            plain_formatter().format_naming_report(&report, OutputFormat::Human).unwrap();
        assert!(output.contains("❌ Naming convention errors:"));
        assert!(output.contains("  dsl/lexer.dsl:"));
        assert!(output.contains("    L4: Function name 'NextToken' should be snake_case"));
        assert!(output.contains("    L9: Struct name 'token' should be PascalCase"));
    }

    #[test]
    fn test_naming_report_skip_note() {
        let output = plain_formatter()
            .format_naming_report(&NamingReport::skipped(), OutputFormat::Human)
            .unwrap();
        assert!(output.contains("Skipping naming check"));
    }

    #[test]
    fn test_json_naming_report() {
        let mut report = NamingReport::new();
        report.add_violation(NamingViolation::new(PathBuf::from("dsl/a.dsl"), 1, "msg"));
        report.files_checked = 3;

        let output =
            plain_formatter().format_naming_report(&report, OutputFormat::Json).unwrap();
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["violations"].as_array().unwrap().len(), 1);
        assert_eq!(json["files_checked"], 3);
        assert_eq!(json["skipped"], false);
    }

    #[test]
    fn test_every_format_ends_with_exactly_one_newline() {
        // The CLI prints reports with `print!`; the formatter owns the
        // trailing newline in both formats.
        let formatter = plain_formatter();
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let scan = formatter.format_scan_report(&sample_scan_report(), format).unwrap();
            assert!(scan.ends_with('\n') && !scan.ends_with("\n\n"), "{format:?}");

            let naming = formatter.format_naming_report(&NamingReport::new(), format).unwrap();
            assert!(naming.ends_with('\n') && !naming.ends_with("\n\n"), "{format:?}");
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::parse("human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("sarif"), None);
    }
}
