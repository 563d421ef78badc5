use crate::parser::{DiagnosticRecord, DiagnosticsByFile, Severity};
use std::collections::BTreeMap;

/// Diagnostics currently shown, keyed by file path
///
/// New results always replace what a file held before; nothing is appended.
#[derive(Debug, Default)]
pub struct DiagnosticCollection {
    files: BTreeMap<String, Vec<DiagnosticRecord>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub hints: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Hint => self.hints += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.hints
    }
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a file's diagnostics; an empty list removes the file
    pub fn set(&mut self, path: impl Into<String>, records: Vec<DiagnosticRecord>) {
        let path = path.into();
        if records.is_empty() {
            self.files.remove(&path);
        } else {
            self.files.insert(path, records);
        }
    }

    /// Replace entries for every file in the result, leave the others alone
    pub fn publish(&mut self, by_file: DiagnosticsByFile) {
        for (path, records) in by_file {
            self.set(path, records);
        }
    }

    /// Replace entries for every file in the result and drop files it no longer mentions
    pub fn sync(&mut self, by_file: DiagnosticsByFile) {
        self.files.retain(|path, _| by_file.contains(path));
        self.publish(by_file);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn get(&self, path: &str) -> Option<&[DiagnosticRecord]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DiagnosticRecord])> {
        self.files
            .iter()
            .map(|(path, records)| (path.as_str(), records.as_slice()))
    }

    /// Number of files holding diagnostics
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for record in self.files.values().flatten() {
            counts.add(record.severity());
        }
        counts
    }
}
