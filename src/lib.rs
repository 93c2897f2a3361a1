//! Tree Warden - source-tree quality gate
//!
//! Architecture: Clean Architecture - the library interface is the application layer
//! - Two independent passes: a banned-pattern scan over the workspace sources
//!   and a naming-convention scan over the DSL tree
//! - The passes share traversal machinery but never share state or gate status

pub mod config;
pub mod domain;
pub mod naming;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod walker;

// Re-export main types for convenient access
pub use domain::violations::{
    Issue, IssueCounts, NamingReport, NamingViolation, ScanReport, Severity, WardenError,
    WardenResult,
};

pub use config::WardenConfig;
pub use naming::NamingAnalyzer;
pub use report::{OutputFormat, ReportFormatter, ReportOptions};
pub use rules::{ExemptionEntry, ExemptionIndex, Matcher, Rule, RuleSet, SeveritySet};
pub use scanner::Scanner;
pub use walker::TreeWalker;

use std::path::{Path, PathBuf};

/// High-level quality gate wiring the fixed configuration, rule table and
/// exemption index together
pub struct Warden {
    config: WardenConfig,
    rules: RuleSet,
    exemptions: ExemptionIndex,
}

impl Warden {
    /// Create a gate with the compiled-in tables
    pub fn new() -> WardenResult<Self> {
        Self::with_config(WardenConfig::default())
    }

    /// Create a gate with custom traversal configuration but default tables
    pub fn with_config(config: WardenConfig) -> WardenResult<Self> {
        Ok(Self { config, rules: RuleSet::defaults()?, exemptions: ExemptionIndex::defaults()? })
    }

    /// Create a gate with fully custom tables
    pub fn with_tables(config: WardenConfig, rules: RuleSet, exemptions: ExemptionIndex) -> Self {
        Self { config, rules, exemptions }
    }

    /// Run the banned-pattern scan over the configured roots under `repo_root`
    ///
    /// Per-file read failures are reported and skipped; they never abort the
    /// run. Issues come back sorted by path then line.
    pub fn check_patterns(&self, repo_root: &Path) -> WardenResult<ScanReport> {
        let walker = TreeWalker::for_patterns(&self.config);
        let scanner = Scanner::new(&self.rules, &self.exemptions, &self.config);

        let roots: Vec<PathBuf> =
            self.config.pattern_roots.iter().map(|r| repo_root.join(r)).collect();

        let mut report = ScanReport::new();
        let mut files_scanned = 0usize;

        for path in walker.walk(&roots) {
            match scanner.scan_file(&path) {
                Ok(issues) => {
                    files_scanned += 1;
                    for issue in issues {
                        report.add_issue(issue);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        report.set_files_scanned(files_scanned);
        report.sort_issues();
        Ok(report)
    }

    /// Run the naming-convention scan over the DSL root under `repo_root`
    ///
    /// An absent root skips the check entirely; non-presence is not a failure.
    pub fn check_naming(&self, repo_root: &Path) -> WardenResult<NamingReport> {
        let root = repo_root.join(&self.config.naming_root);
        if !root.exists() {
            tracing::debug!("Naming root {} not found, skipping", root.display());
            return Ok(NamingReport::skipped());
        }

        let walker = TreeWalker::for_naming(&self.config);
        let analyzer = NamingAnalyzer::new();

        let mut report = NamingReport::new();
        let mut files_checked = 0usize;

        for path in walker.walk_root(&root) {
            match analyzer.check_file(&path) {
                Ok(violations) => {
                    files_checked += 1;
                    for violation in violations {
                        report.add_violation(violation);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        report.files_checked = files_checked;
        report.sort_violations();
        Ok(report)
    }
}

/// Convenience function: banned-pattern scan with the compiled-in tables
pub fn check_patterns(repo_root: &Path) -> WardenResult<ScanReport> {
    Warden::new()?.check_patterns(repo_root)
}

/// Convenience function: naming-convention scan with the compiled-in tables
pub fn check_naming(repo_root: &Path) -> WardenResult<NamingReport> {
    Warden::new()?.check_naming(repo_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("crates/core/src")).unwrap();
        temp
    }

    #[test]
    fn test_end_to_end_error_issue_fails_the_gate() {
        let temp = workspace();
        fs::write(
            temp.path().join("crates/core/src/lib.rs"),
            "fn f() -> u32 {\n    lookup().unwrap()\n}\n",
        )
        .unwrap();

        let report = check_patterns(temp.path()).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].line_number, 2);
        assert_eq!(report.issues[0].severity, Severity::Error);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_end_to_end_exempt_path_passes_the_gate() {
        let temp = workspace();
        // Same content, but under a path the exemption table relaxes for errors.
        fs::create_dir_all(temp.path().join("crates/runtime/src")).unwrap();
        fs::write(
            temp.path().join("crates/runtime/src/alloc.rs"),
            "fn f() -> u32 {\n    lookup().unwrap()\n}\n",
        )
        .unwrap();

        let report = check_patterns(temp.path()).unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_unreadable_file_does_not_abort_the_run() {
        let temp = workspace();
        // Not valid UTF-8; reading it fails, the rest of the tree still scans.
        fs::write(temp.path().join("crates/core/src/bad.rs"), b"\xFF\xFE\x00broken").unwrap();
        fs::write(
            temp.path().join("crates/core/src/lib.rs"),
            "fn f() { todo!() }\n",
        )
        .unwrap();

        let report = check_patterns(temp.path()).unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].file_path.ends_with("crates/core/src/lib.rs"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_end_to_end_pruned_dirs_are_not_scanned() {
        let temp = workspace();
        fs::create_dir_all(temp.path().join("crates/core/target")).unwrap();
        fs::write(
            temp.path().join("crates/core/target/generated.rs"),
            "fn f() { panic!(\"generated\") }\n",
        )
        .unwrap();
        fs::write(temp.path().join("crates/core/src/lib.rs"), "fn f() {}\n").unwrap();

        let report = check_patterns(temp.path()).unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.files_scanned, 1);
    }

    #[test]
    fn test_end_to_end_missing_roots_yield_clean_pass() {
        let temp = TempDir::new().unwrap();
        let report = check_patterns(temp.path()).unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_end_to_end_issues_sorted_by_path_then_line() {
        let temp = workspace();
        fs::create_dir_all(temp.path().join("crates/zeta/src")).unwrap();
        fs::write(
            temp.path().join("crates/zeta/src/lib.rs"),
            "fn f() { panic!(\"a\") }\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("crates/core/src/lib.rs"),
            "fn g() { todo!() }\nfn h() { panic!(\"b\") }\n",
        )
        .unwrap();

        let report = check_patterns(temp.path()).unwrap();
        assert_eq!(report.issues.len(), 3);
        assert!(report.issues[0].file_path.ends_with("crates/core/src/lib.rs"));
        assert_eq!(report.issues[0].line_number, 1);
        assert_eq!(report.issues[1].line_number, 2);
        assert!(report.issues[2].file_path.ends_with("crates/zeta/src/lib.rs"));
    }

    #[test]
    fn test_end_to_end_naming_header_violation() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dsl")).unwrap();
        fs::write(temp.path().join("dsl/lexer.dsl"), "fn next_token() {\n}\n").unwrap();

        let report = check_naming(temp.path()).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].line_number, 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_end_to_end_naming_skip_when_root_absent() {
        let temp = TempDir::new().unwrap();
        let report = check_naming(temp.path()).unwrap();
        assert!(report.root_missing);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_gates_are_independent() {
        // A naming violation must not leak into the banned-pattern gate.
        let temp = workspace();
        fs::write(temp.path().join("crates/core/src/lib.rs"), "fn f() {}\n").unwrap();
        fs::create_dir_all(temp.path().join("dsl")).unwrap();
        fs::write(temp.path().join("dsl/bad.dsl"), "// lexer rules\nfn BadName() {\n}\n").unwrap();

        let warden = Warden::new().unwrap();
        let patterns = warden.check_patterns(temp.path()).unwrap();
        let naming = warden.check_naming(temp.path()).unwrap();

        assert_eq!(patterns.exit_code(), 0);
        assert_eq!(naming.exit_code(), 1);
    }
}
