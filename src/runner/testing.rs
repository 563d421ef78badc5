use crate::error::ToolError;
use crate::tool::{Analyzer, ToolOutput};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Analyzer that returns canned output and records its calls
pub struct FakeAnalyzer {
    stdout: Option<String>,
    error: Option<fn() -> ToolError>,
    delay: Duration,
    panic: bool,
    calls: Mutex<Vec<(PathBuf, String)>>,
    running: AtomicUsize,
    max_running: AtomicUsize,
}

impl FakeAnalyzer {
    pub fn ok(stdout: &str) -> Self {
        Self::new(Some(stdout.to_string()), None)
    }

    pub fn err(error: fn() -> ToolError) -> Self {
        Self::new(None, Some(error))
    }

    /// Echo a diagnostic naming the analyzed file, after a delay
    pub fn echo(delay: Duration) -> Self {
        let mut fake = Self::new(None, None);
        fake.delay = delay;
        fake
    }

    /// Panic inside `analyze`, as a crashing task would
    pub fn panics() -> Self {
        let mut fake = Self::new(None, None);
        fake.panic = true;
        fake
    }

    fn new(stdout: Option<String>, error: Option<fn() -> ToolError>) -> Self {
        Self {
            stdout,
            error,
            delay: Duration::ZERO,
            panic: false,
            calls: Mutex::new(Vec::new()),
            running: AtomicUsize::new(0),
            max_running: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_running(&self) -> usize {
        self.max_running.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for FakeAnalyzer {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn analyze(
        &self,
        file: &Path,
        standard: &str,
        _timeout: Duration,
    ) -> Result<ToolOutput, ToolError> {
        self.calls
            .lock()
            .unwrap()
            .push((file.to_path_buf(), standard.to_string()));

        if self.panic {
            panic!("analyzer crashed on {}", file.display());
        }

        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(now, Ordering::SeqCst);
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        self.running.fetch_sub(1, Ordering::SeqCst);

        if let Some(error) = self.error {
            return Err(error());
        }

        let stdout = match self.stdout {
            Some(ref s) => s.clone(),
            None => format!("{}:1:1: warning: checked\n", file.display()),
        };

        Ok(ToolOutput {
            stdout,
            stderr: String::new(),
            duration: self.delay,
            exit_code: 0,
        })
    }
}
