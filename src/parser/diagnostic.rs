use serde::Serialize;

/// Normalized three-level severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Hint,
}

impl Severity {
    /// Map a tool keyword to a severity
    /// Only `error` and `warning` are distinguished, everything else is a hint
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Hint,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// Zero-based (line, character) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Zero-based half-open range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// One located finding taken from a single report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    file_path: String,
    line: u32,
    column: u32,
    severity: Severity,
    message: String,
}

impl DiagnosticRecord {
    pub fn new(
        file_path: impl Into<String>,
        line: u32,
        column: u32,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            column,
            severity,
            message: message.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// 1-based line as reported by the tool
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column as reported by the tool
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Single-character range covering the reported position
    pub fn span(&self) -> Span {
        let line = self.line.saturating_sub(1);
        let character = self.column.saturating_sub(1);
        Span {
            start: Position { line, character },
            end: Position {
                line,
                character: character + 1,
            },
        }
    }
}
