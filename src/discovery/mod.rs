mod scope;

pub use scope::walk_directory;

use crate::config::Sources;
use crate::error::DiscoveryError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolve the files to check
///
/// Explicit files are kept as given, directories are walked and filtered by
/// the source patterns. With no paths, the configured source paths are used.
/// Relative paths resolve against `target`.
pub fn discover_files(
    target: &Path,
    paths: &[PathBuf],
    sources: &Sources,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let roots = if paths.is_empty() {
        sources.paths.as_slice()
    } else {
        paths
    };

    let mut files = BTreeSet::new();

    for root in roots {
        let full_path = target.join(root);
        if full_path.is_file() {
            files.insert(root.clone());
        } else if full_path.is_dir() {
            files.extend(walk_directory(target, &full_path, sources)?);
        } else {
            return Err(DiscoveryError::NotFound(full_path));
        }
    }

    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_file_bypasses_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = discover_files(
            dir.path(),
            &[PathBuf::from("notes.txt")],
            &Sources::default(),
        )
        .unwrap();
        assert_eq!(files, vec![PathBuf::from("notes.txt")]);
    }

    #[test]
    fn test_configured_paths_used_when_none_given() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.c"), "").unwrap();
        fs::write(dir.path().join("src/b.cpp"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let sources = Sources {
            paths: vec![PathBuf::from("src")],
            ..Sources::default()
        };
        let files = discover_files(dir.path(), &[], &sources).unwrap();
        assert_eq!(files, vec![PathBuf::from("src/a.c"), PathBuf::from("src/b.cpp")]);
    }

    #[test]
    fn test_duplicates_are_merged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.c"), "").unwrap();

        let files = discover_files(
            dir.path(),
            &[PathBuf::from("a.c"), PathBuf::from("."), PathBuf::from("a.c")],
            &Sources::default(),
        )
        .unwrap();
        assert_eq!(files, vec![PathBuf::from("a.c")]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_files(dir.path(), &[PathBuf::from("nope.c")], &Sources::default());
        assert!(matches!(result, Err(DiscoveryError::NotFound(_))));
    }
}
