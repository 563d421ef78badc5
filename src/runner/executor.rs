use crate::config::{Config, Language};
use crate::error::ToolError;
use crate::parser::{parse_report, DiagnosticsByFile};
use crate::tool::Analyzer;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{CheckStatus, FileResult};

/// Decide which standard a file is checked with, or why it is skipped
pub fn plan_file<'a>(config: &'a Config, file: &Path) -> Result<&'a str, String> {
    let language =
        Language::from_path(file).ok_or_else(|| "not a C/C++ source file".to_string())?;
    config
        .standards
        .for_language(language)
        .ok_or_else(|| format!("no {} standard configured", language))
}

pub async fn check_file(analyzer: &dyn Analyzer, config: &Config, file: &Path) -> FileResult {
    let start = std::time::Instant::now();

    let standard = match plan_file(config, file) {
        Ok(s) => s,
        Err(reason) => {
            debug!("Skipping {} - {}", file.display(), reason);
            return FileResult {
                file: file.to_path_buf(),
                status: CheckStatus::Skipped { reason },
                diagnostics: DiagnosticsByFile::new(),
                duration: start.elapsed(),
            };
        }
    };

    let timeout = Duration::from_secs(config.timeout_sec);
    info!(
        "Checking {} with {} (-std={})",
        file.display(),
        analyzer.name(),
        standard
    );

    let (status, diagnostics) = match analyzer.analyze(file, standard, timeout).await {
        Ok(output) => {
            debug!(
                "{} exited with {} after {:.1}s",
                analyzer.name(),
                output.exit_code,
                output.duration.as_secs_f64()
            );
            (CheckStatus::Completed, parse_report(&output.stdout))
        }
        Err(ToolError::Timeout(d)) => {
            warn!("{} timed out after {:?} on {}", analyzer.name(), d, file.display());
            (CheckStatus::TimedOut, DiagnosticsByFile::new())
        }
        Err(e) => {
            warn!("{} failed on {}: {}", analyzer.name(), file.display(), e);
            (
                CheckStatus::Failed {
                    error: e.to_string(),
                },
                DiagnosticsByFile::new(),
            )
        }
    };

    FileResult {
        file: file.to_path_buf(),
        status,
        diagnostics,
        duration: start.elapsed(),
    }
}
