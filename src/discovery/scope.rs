use crate::config::Sources;
use crate::error::DiscoveryError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

fn build_globset(patterns: &[String], label: &str) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| DiscoveryError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| DiscoveryError::GlobPattern {
        pattern: label.to_string(),
        source: e,
    })
}

/// Walk a directory and return source files matching the include/exclude patterns
/// Returned paths are relative to `target` when they live under it
pub fn walk_directory(
    target: &Path,
    dir: &Path,
    sources: &Sources,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let include_set = build_globset(&sources.include, "include set")?;
    let exclude_set = build_globset(&sources.exclude, "exclude set")?;

    let mut files = Vec::new();

    // Use ignore crate to respect .gitignore
    let walker = WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let rel_path = path.strip_prefix(target).unwrap_or(path);

        if !sources.include.is_empty() && !include_set.is_match(rel_path) {
            continue;
        }

        if exclude_set.is_match(rel_path) {
            continue;
        }

        files.push(rel_path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
