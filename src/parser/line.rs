use super::{DiagnosticRecord, Severity};
use regex::Regex;

/// `<file>:<line>:<column>: <severity>: <message>`
/// Digits are ASCII only; the file part is the shortest prefix that lets the rest match.
const DIAGNOSTIC_LINE: &str = r"^(.+?):([0-9]+):([0-9]+): ((?i:warning|note|error)): (.*)$";

pub fn diagnostic_line_regex() -> Option<Regex> {
    Regex::new(DIAGNOSTIC_LINE).ok()
}

/// Try to read one diagnostic from a single physical line
pub fn parse_line(re: &Regex, line: &str) -> Option<DiagnosticRecord> {
    let line = line.trim_end_matches('\r');
    let caps = re.captures(line)?;

    let file = caps.get(1)?.as_str();
    // Out-of-range positions are treated like any other malformed line
    let line_no: u32 = caps.get(2)?.as_str().parse().ok()?;
    let column: u32 = caps.get(3)?.as_str().parse().ok()?;
    let severity = Severity::from_keyword(caps.get(4)?.as_str());
    let message = caps.get(5)?.as_str();

    Some(DiagnosticRecord::new(file, line_no, column, severity, message))
}
