mod by_file;
mod diagnostic;
mod line;

pub use by_file::DiagnosticsByFile;
pub use diagnostic::{DiagnosticRecord, Position, Severity, Span};

/// Parse a tool report into diagnostics grouped by file
///
/// Every physical line is examined on its own. Lines that are not shaped like
/// `path:line:col: severity: message` (banners, code excerpts, caret markers,
/// continuation lines) are dropped and never folded into a neighbouring
/// diagnostic. Never fails: unrecognized input yields an empty result.
pub fn parse_report(raw: &str) -> DiagnosticsByFile {
    let Some(re) = line::diagnostic_line_regex() else {
        tracing::warn!("Diagnostic line pattern failed to compile");
        return DiagnosticsByFile::new();
    };

    let grouped: DiagnosticsByFile = raw
        .lines()
        .filter_map(|l| line::parse_line(&re, l))
        .collect();

    tracing::debug!(
        "Parsed {} diagnostics across {} files",
        grouped.total(),
        grouped.len()
    );
    grouped
}
