//! File-tree traversal with directory pruning
//!
//! Architecture: Infrastructure Layer - traversal yields candidate paths only
//! - Pruned directories are rejected before descent, so excluded trees (build
//!   output, VCS metadata) are never walked no matter how large they are
//! - A nonexistent root yields nothing; absence is not an error

use crate::config::WardenConfig;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursive traversal over one or more roots, yielding candidate files
#[derive(Debug, Clone)]
pub struct TreeWalker {
    include_extensions: Vec<String>,
    prune_dirs: Vec<String>,
    exclude_suffixes: Vec<String>,
}

impl TreeWalker {
    pub fn new(
        include_extensions: Vec<String>,
        prune_dirs: Vec<String>,
        exclude_suffixes: Vec<String>,
    ) -> Self {
        Self { include_extensions, prune_dirs, exclude_suffixes }
    }

    /// Walker for the banned-pattern scan, wired from the fixed configuration
    pub fn for_patterns(config: &WardenConfig) -> Self {
        Self::new(
            config.include_extensions.clone(),
            config.prune_dirs.clone(),
            config.exclude_suffixes.clone(),
        )
    }

    /// Walker for the naming-convention scan
    pub fn for_naming(config: &WardenConfig) -> Self {
        Self::new(
            vec![config.naming_extension.clone()],
            config.naming_prune_dirs.clone(),
            Vec::new(),
        )
    }

    /// Lazily enumerate candidate files under the given roots, in root order
    pub fn walk<'a>(&'a self, roots: &'a [PathBuf]) -> impl Iterator<Item = PathBuf> + 'a {
        roots.iter().flat_map(move |root| self.walk_root(root))
    }

    /// Enumerate candidate files under a single root
    pub fn walk_root<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        if !root.exists() {
            tracing::debug!("Skipping nonexistent root: {}", root.display());
        }

        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(move |path| self.is_candidate(path))
    }

    /// Whether a directory entry must not be descended into
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        entry
            .file_name()
            .to_str()
            .map(|name| self.prune_dirs.iter().any(|d| d == name))
            .unwrap_or(false)
    }

    /// Whether a file path survives the extension and suffix filters
    fn is_candidate(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.include_extensions.iter().any(|e| e == ext))
            .unwrap_or(false);
        if !has_extension {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.exclude_suffixes.iter().any(|suffix| path_str.ends_with(suffix.as_str()))
    }
}
