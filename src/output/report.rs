use super::render::{severity_totals, JsonGroups};
use crate::error::OutputError;
use crate::runner::{CheckStatus, RunReport};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: String,
    duration_sec: f64,
    files: Vec<FileSummary>,
    totals: HashMap<String, usize>,
    diagnostics: JsonGroups<'a>,
}

#[derive(Serialize)]
struct FileSummary {
    file: PathBuf,
    status: String,
    duration_sec: f64,
    diagnostics: usize,
}

/// Write `diagnostics.md` and `diagnostics.json` for a run
pub fn write_run_report(report_dir: &Path, report: &RunReport) -> Result<(), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let collection = report.collection();

    let json_report = JsonReport {
        timestamp: Utc::now().to_rfc3339(),
        duration_sec: report.total_duration.as_secs_f64(),
        files: report
            .results
            .iter()
            .map(|r| FileSummary {
                file: r.file.clone(),
                status: r.status.to_string(),
                duration_sec: r.duration.as_secs_f64(),
                diagnostics: r.diagnostics.total(),
            })
            .collect(),
        totals: severity_totals(collection.iter()),
        diagnostics: JsonGroups::new(collection.iter()),
    };
    let json = serde_json::to_string_pretty(&json_report)?;
    fs::write(report_dir.join("diagnostics.json"), json).map_err(OutputError::WriteReport)?;

    let md = build_markdown(report);
    fs::write(report_dir.join("diagnostics.md"), md).map_err(OutputError::WriteReport)?;

    Ok(())
}

fn build_markdown(report: &RunReport) -> String {
    let mut content = String::new();
    let counts = report.counts();

    content.push_str("# clang-tidy diagnostics\n\n");

    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    content.push_str(&format!("| Files | {} |\n", report.results.len()));
    content.push_str(&format!(
        "| Duration | {:.1}s |\n",
        report.total_duration.as_secs_f64()
    ));
    content.push_str(&format!("| Errors | {} |\n", counts.errors));
    content.push_str(&format!("| Warnings | {} |\n", counts.warnings));
    content.push_str(&format!("| Hints | {} |\n", counts.hints));
    content.push_str("\n---\n\n");

    for result in &report.results {
        content.push_str(&format!(
            "## `{}` {}\n\n",
            result.file.display(),
            format_status(&result.status)
        ));

        if result.diagnostics.is_empty() {
            content.push_str("*No diagnostics*\n\n");
            continue;
        }

        for (path, records) in result.diagnostics.iter() {
            for record in records {
                content.push_str(&format!(
                    "- **{}** `{}:{}:{}` {}\n",
                    record.severity(),
                    path,
                    record.line(),
                    record.column(),
                    record.message()
                ));
            }
        }
        content.push('\n');
    }

    content
}

fn format_status(status: &CheckStatus) -> String {
    match status {
        CheckStatus::Completed => "✅".to_string(),
        CheckStatus::Skipped { reason } => format!("⏭️ skipped ({})", reason),
        CheckStatus::TimedOut => "⏱️ timed out".to_string(),
        CheckStatus::Failed { error } => format!("❌ failed ({})", error),
    }
}
