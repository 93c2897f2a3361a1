//! Compiled-in configuration for both scan passes
//!
//! Architecture: Value Object - configuration is a plain immutable record
//! - All tables are fixed at build time; nothing is read from disk at startup
//! - Constructed once and passed explicitly into the scanners, never ambient

use std::path::PathBuf;

/// Fixed configuration consumed by the banned-pattern and naming scans
#[derive(Debug, Clone)]
pub struct WardenConfig {
    /// Roots (relative to the repo root) enumerated by the banned-pattern scan
    pub pattern_roots: Vec<PathBuf>,
    /// File extensions the banned-pattern scan recognizes
    pub include_extensions: Vec<String>,
    /// Directory names that are never entered during traversal
    pub prune_dirs: Vec<String>,
    /// Path suffixes excluded from the banned-pattern scan entirely
    pub exclude_suffixes: Vec<String>,
    /// Path fragment identifying CLI entry-point crates; such files may print
    pub cli_entry_marker: String,
    /// Root (relative to the repo root) of the naming-convention scan
    pub naming_root: PathBuf,
    /// File extension the naming-convention scan recognizes
    pub naming_extension: String,
    /// Directory names pruned during the naming-convention traversal
    pub naming_prune_dirs: Vec<String>,
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            pattern_roots: vec![PathBuf::from("crates"), PathBuf::from("lib")],
            include_extensions: vec!["rs".to_string(), "dsl".to_string()],
            prune_dirs: vec![
                "tests".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
                ".git".to_string(),
                "examples".to_string(),
            ],
            // The CLI entry point is allowed to print; it is not scanned at all
            exclude_suffixes: vec!["_cli/src/main.rs".to_string()],
            cli_entry_marker: "_cli".to_string(),
            naming_root: PathBuf::from("dsl"),
            naming_extension: "dsl".to_string(),
            naming_prune_dirs: vec![
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
            ],
        }
    }
}

impl WardenConfig {
    /// Alias for the compiled-in defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }
}
