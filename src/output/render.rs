use crate::parser::{DiagnosticRecord, Severity, Span};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct DiagnosticView<'a> {
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: &'a str,
    pub range: Span,
}

impl<'a> From<&'a DiagnosticRecord> for DiagnosticView<'a> {
    fn from(record: &'a DiagnosticRecord) -> Self {
        Self {
            line: record.line(),
            column: record.column(),
            severity: record.severity(),
            message: record.message(),
            range: record.span(),
        }
    }
}

/// Render diagnostics back in the tool's own one-line shape, 1-based
pub fn render_text<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [DiagnosticRecord])>,
{
    let mut out = String::new();
    for (path, records) in groups {
        for record in records {
            out.push_str(&format!(
                "{}:{}:{}: {}: {}\n",
                path,
                record.line(),
                record.column(),
                record.severity(),
                record.message()
            ));
        }
    }
    out
}

/// Path-keyed groups serialized as a JSON object in iteration order
pub struct JsonGroups<'a>(Vec<(&'a str, Vec<DiagnosticView<'a>>)>);

impl<'a> JsonGroups<'a> {
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [DiagnosticRecord])>,
    {
        Self(
            groups
                .into_iter()
                .map(|(path, records)| (path, records.iter().map(DiagnosticView::from).collect()))
                .collect(),
        )
    }
}

impl Serialize for JsonGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (path, views) in &self.0 {
            map.serialize_entry(path, views)?;
        }
        map.end()
    }
}

/// Render diagnostics as a JSON object keyed by path
pub fn render_json<'a, I>(groups: I) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = (&'a str, &'a [DiagnosticRecord])>,
{
    serde_json::to_string_pretty(&JsonGroups::new(groups))
}

/// Counts keyed by severity name
pub fn severity_totals<'a, I>(groups: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = (&'a str, &'a [DiagnosticRecord])>,
{
    let mut totals = HashMap::new();
    for (_, records) in groups {
        for record in records {
            *totals.entry(record.severity().to_string()).or_insert(0) += 1;
        }
    }
    totals
}
