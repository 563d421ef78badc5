//! Run clang-tidy style analyzers and turn their text reports into
//! file-grouped diagnostics.
//!
//! The core is [`parse_report`], a pure function over the captured output of
//! one tool run. Everything else (config, file discovery, process invocation,
//! reports) wraps it for the `tidy-adapter` binary.

pub mod cli;
pub mod collection;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod runner;
pub mod tool;

pub use collection::{DiagnosticCollection, SeverityCounts};
pub use parser::{parse_report, DiagnosticRecord, DiagnosticsByFile, Position, Severity, Span};
