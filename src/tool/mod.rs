mod clang_tidy;

pub use clang_tidy::ClangTidyRunner;

use crate::config::Config;
use crate::error::ToolError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub exit_code: i32,
}

/// An external static-analysis tool that reports diagnostics as text
#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(
        &self,
        file: &Path,
        standard: &str,
        timeout: Duration,
    ) -> Result<ToolOutput, ToolError>;
}

/// Create the analyzer described by the tool config
pub fn create_analyzer(config: &Config) -> Arc<dyn Analyzer> {
    Arc::new(ClangTidyRunner {
        binary: config.tool.binary.clone(),
        checks: config.tool.checks.clone(),
        args: config.tool.args.clone(),
        working_dir: config.target.clone(),
    })
}
