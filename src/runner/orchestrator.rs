use crate::collection::{DiagnosticCollection, SeverityCounts};
use crate::config::Config;
use crate::discovery::discover_files;
use crate::error::{AdapterError, RunnerError};
use crate::parser::DiagnosticsByFile;
use crate::tool::Analyzer;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::executor::check_file;

#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<FileResult>,
    pub total_duration: Duration,
}

impl RunReport {
    /// Publish every file's diagnostics in check order
    pub fn collection(&self) -> DiagnosticCollection {
        let mut collection = DiagnosticCollection::new();
        for result in &self.results {
            collection.publish(result.diagnostics.clone());
        }
        collection
    }

    /// Totals over the published collection, so a file reported by several
    /// runs is counted once
    pub fn counts(&self) -> SeverityCounts {
        self.collection().counts()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.status, CheckStatus::Failed { .. } | CheckStatus::TimedOut))
    }
}

#[derive(Debug)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: CheckStatus,
    pub diagnostics: DiagnosticsByFile,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    Completed,
    Skipped { reason: String },
    TimedOut,
    Failed { error: String },
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Completed => write!(f, "completed"),
            CheckStatus::Skipped { reason } => write!(f, "skipped: {}", reason),
            CheckStatus::TimedOut => write!(f, "timed_out"),
            CheckStatus::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

pub struct Orchestrator {
    config: Arc<Config>,
    analyzer: Arc<dyn Analyzer>,
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    pub fn new(config: Config, analyzer: Arc<dyn Analyzer>) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
        Self {
            config: Arc::new(config),
            analyzer,
            semaphore,
        }
    }

    /// Check every file, at most `concurrency` at a time
    /// Results come back in the order the files were given
    pub async fn run(&self, files: Vec<PathBuf>) -> Result<RunReport, RunnerError> {
        let start = std::time::Instant::now();

        if files.is_empty() {
            return Err(RunnerError::NoFiles);
        }

        info!(
            "Checking {} files with concurrency {}",
            files.len(),
            self.config.concurrency
        );

        let mut futures = FuturesUnordered::new();

        for (idx, file) in files.into_iter().enumerate() {
            let permit = self.semaphore.clone().acquire_owned().await?;
            let config = self.config.clone();
            let analyzer = self.analyzer.clone();
            let task_file = file.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit; // hold until done
                check_file(analyzer.as_ref(), &config, &task_file).await
            });
            futures.push(async move { (idx, file, handle.await) });
        }

        let mut results = Vec::new();
        while let Some((idx, file, joined)) = futures.next().await {
            let result = match joined {
                Ok(result) => {
                    info!(
                        "Finished {}: {} diagnostics ({})",
                        result.file.display(),
                        result.diagnostics.total(),
                        result.status
                    );
                    result
                }
                Err(e) => {
                    warn!("Task for {} panicked: {}", file.display(), e);
                    FileResult {
                        file,
                        status: CheckStatus::Failed {
                            error: format!("task panicked: {}", e),
                        },
                        diagnostics: DiagnosticsByFile::new(),
                        duration: Duration::ZERO,
                    }
                }
            };
            results.push((idx, result));
        }

        results.sort_by_key(|(idx, _)| *idx);

        Ok(RunReport {
            results: results.into_iter().map(|(_, r)| r).collect(),
            total_duration: start.elapsed(),
        })
    }
}

/// Validate `config`, resolve `paths` and check every file found
pub async fn check_paths(
    config: &Config,
    paths: &[PathBuf],
    analyzer: Arc<dyn Analyzer>,
) -> Result<RunReport, AdapterError> {
    config.validate()?;

    let files = discover_files(&config.target, paths, &config.sources)?;
    debug!("Discovered {} files", files.len());

    let report = Orchestrator::new(config.clone(), analyzer).run(files).await?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Severity;
    use crate::runner::testing::FakeAnalyzer;

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[tokio::test]
    async fn test_run_preserves_input_order() {
        let analyzer = Arc::new(FakeAnalyzer::echo(Duration::from_millis(5)));
        let orchestrator = Orchestrator::new(Config::default(), analyzer.clone());

        let report = orchestrator
            .run(files(&["c.c", "a.cpp", "b.cxx", "notes.txt"]))
            .await
            .unwrap();

        let order: Vec<_> = report.results.iter().map(|r| r.file.clone()).collect();
        assert_eq!(order, files(&["c.c", "a.cpp", "b.cxx", "notes.txt"]));
        assert!(matches!(report.results[3].status, CheckStatus::Skipped { .. }));
        assert_eq!(analyzer.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_run_respects_concurrency_limit() {
        let analyzer = Arc::new(FakeAnalyzer::echo(Duration::from_millis(20)));
        let config = Config {
            concurrency: 2,
            ..Config::default()
        };
        let orchestrator = Orchestrator::new(config, analyzer.clone());

        orchestrator
            .run(files(&["a.c", "b.c", "c.c", "d.c", "e.c"]))
            .await
            .unwrap();

        assert!(analyzer.max_running() <= 2);
        assert_eq!(analyzer.calls().len(), 5);
    }

    #[tokio::test]
    async fn test_run_without_files_is_an_error() {
        let orchestrator =
            Orchestrator::new(Config::default(), Arc::new(FakeAnalyzer::ok("")));
        assert!(matches!(
            orchestrator.run(Vec::new()).await,
            Err(RunnerError::NoFiles)
        ));
    }

    #[tokio::test]
    async fn test_report_collection_and_counts() {
        let analyzer = Arc::new(FakeAnalyzer::ok(
            "shared.h:1:1: warning: from header\nmain.c:2:2: error: broken\n",
        ));
        let orchestrator = Orchestrator::new(Config::default(), analyzer);

        let report = orchestrator.run(files(&["main.c", "other.c"])).await.unwrap();

        // Both runs report shared.h; the collection keeps one copy per file
        let collection = report.collection();
        assert_eq!(collection.get("shared.h").unwrap().len(), 1);
        assert_eq!(collection.get("main.c").unwrap()[0].severity(), Severity::Error);

        // Totals follow the collection: shared.h and main.c are each counted once
        let counts = report.counts();
        assert_eq!(counts, collection.counts());
        assert_eq!(counts.errors, 1);
        assert_eq!(counts.warnings, 1);
        assert_eq!(report.failed().count(), 0);
    }

    #[tokio::test]
    async fn test_panicking_task_is_reported_as_failed() {
        let analyzer = Arc::new(FakeAnalyzer::panics());
        let orchestrator = Orchestrator::new(Config::default(), analyzer);

        let report = orchestrator
            .run(files(&["a.c", "notes.txt", "b.cpp"]))
            .await
            .unwrap();

        let order: Vec<_> = report.results.iter().map(|r| r.file.clone()).collect();
        assert_eq!(order, files(&["a.c", "notes.txt", "b.cpp"]));
        match &report.results[0].status {
            CheckStatus::Failed { error } => assert!(error.contains("panicked")),
            other => panic!("unexpected status: {:?}", other),
        }
        assert!(matches!(report.results[1].status, CheckStatus::Skipped { .. }));
        assert_eq!(report.failed().count(), 2);
    }

    #[tokio::test]
    async fn test_check_paths_runs_discovered_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/main.c"), "").unwrap();
        std::fs::write(dir.path().join("src/util.cpp"), "").unwrap();
        std::fs::write(dir.path().join("src/README"), "").unwrap();

        let config = Config {
            target: dir.path().to_path_buf(),
            ..Config::default()
        };
        let analyzer = Arc::new(FakeAnalyzer::echo(Duration::ZERO));

        let report = check_paths(&config, &files(&["src"]), analyzer.clone())
            .await
            .unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(analyzer.calls().len(), 2);
        assert_eq!(report.failed().count(), 0);
    }

    #[tokio::test]
    async fn test_check_paths_missing_path_is_a_discovery_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            target: dir.path().to_path_buf(),
            ..Config::default()
        };

        let result = check_paths(
            &config,
            &files(&["missing.c"]),
            Arc::new(FakeAnalyzer::ok("")),
        )
        .await;
        assert!(matches!(result, Err(AdapterError::Discovery(_))));
    }

    #[tokio::test]
    async fn test_check_paths_rejects_invalid_config() {
        let config = Config {
            concurrency: 0,
            ..Config::default()
        };

        let result = check_paths(&config, &[], Arc::new(FakeAnalyzer::ok(""))).await;
        assert!(matches!(result, Err(AdapterError::Config(_))));
    }

    #[tokio::test]
    async fn test_check_paths_empty_directory_is_a_runner_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            target: dir.path().to_path_buf(),
            ..Config::default()
        };

        let result = check_paths(&config, &[], Arc::new(FakeAnalyzer::ok(""))).await;
        assert!(matches!(
            result,
            Err(AdapterError::Runner(RunnerError::NoFiles))
        ));
    }
}
