use super::DiagnosticRecord;
use std::collections::HashMap;

/// Diagnostics grouped by the exact path text the tool reported
///
/// Files keep the order in which they were first seen, and each file keeps
/// its diagnostics in input order. Paths are compared as plain strings, so
/// `src/a.c` and `./src/a.c` are two separate groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsByFile {
    entries: Vec<(String, Vec<DiagnosticRecord>)>,
    index: HashMap<String, usize>,
}

impl DiagnosticsByFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its file's group, creating the group on first sight
    pub fn push(&mut self, record: DiagnosticRecord) {
        match self.index.get(record.file_path()) {
            Some(&idx) => self.entries[idx].1.push(record),
            None => {
                let path = record.file_path().to_string();
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, vec![record]));
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&[DiagnosticRecord]> {
        self.index
            .get(path)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// File paths in first-seen order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DiagnosticRecord])> {
        self.entries
            .iter()
            .map(|(path, records)| (path.as_str(), records.as_slice()))
    }

    /// Number of distinct files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics across all files
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl FromIterator<DiagnosticRecord> for DiagnosticsByFile {
    fn from_iter<I: IntoIterator<Item = DiagnosticRecord>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for record in iter {
            grouped.push(record);
        }
        grouped
    }
}

impl IntoIterator for DiagnosticsByFile {
    type Item = (String, Vec<DiagnosticRecord>);
    type IntoIter = std::vec::IntoIter<(String, Vec<DiagnosticRecord>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
