use super::{Analyzer, ToolOutput};
use crate::error::ToolError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct ClangTidyRunner {
    pub binary: PathBuf,
    pub checks: Option<String>,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl ClangTidyRunner {
    /// `[--checks=..] <args..> <file> -- -std=<standard>`
    fn build_args(&self, file: &Path, standard: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(ref checks) = self.checks {
            args.push(format!("--checks={}", checks).into());
        }
        args.extend(self.args.iter().map(OsString::from));
        args.push(file.as_os_str().to_os_string());
        args.push("--".into());
        args.push(format!("-std={}", standard).into());
        args
    }
}

#[async_trait]
impl Analyzer for ClangTidyRunner {
    fn name(&self) -> &'static str {
        "clang-tidy"
    }

    async fn analyze(
        &self,
        file: &Path,
        standard: &str,
        timeout: Duration,
    ) -> Result<ToolOutput, ToolError> {
        // Plain command names go through PATH lookup
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            Command::new(binary_str.as_ref())
        };

        cmd.current_dir(&self.working_dir)
            .args(self.build_args(file, standard))
            .kill_on_drop(true);

        debug!("Running {} on {}", self.name(), file.display());
        let start = std::time::Instant::now();

        let output = tokio_timeout(timeout, cmd.output())
            .await
            .map_err(|_| ToolError::Timeout(timeout))?
            .map_err(ToolError::Io)?;

        let result = ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
            exit_code: output.status.code().unwrap_or(-1),
        };

        // clang-tidy exits non-zero whenever it reports errors, so only an
        // empty report counts as a failed run
        if !output.status.success() && result.stdout.trim().is_empty() {
            return Err(ToolError::NonZeroExit {
                code: result.exit_code,
                stderr: result.stderr.clone(),
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(checks: Option<&str>, args: &[&str]) -> ClangTidyRunner {
        ClangTidyRunner {
            binary: PathBuf::from("clang-tidy"),
            checks: checks.map(str::to_string),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn test_build_args_minimal() {
        let args = runner(None, &[]).build_args(Path::new("src/main.cpp"), "c++17");
        assert_eq!(args, vec!["src/main.cpp", "--", "-std=c++17"]);
    }

    #[test]
    fn test_build_args_with_checks_and_extra_args() {
        let args = runner(Some("-*,bugprone-*"), &["--quiet", "-p=build"])
            .build_args(Path::new("a.c"), "c11");
        assert_eq!(
            args,
            vec!["--checks=-*,bugprone-*", "--quiet", "-p=build", "a.c", "--", "-std=c11"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_binary_is_io_error() {
        let runner = ClangTidyRunner {
            binary: PathBuf::from("/nonexistent/clang-tidy"),
            checks: None,
            args: Vec::new(),
            working_dir: PathBuf::from("."),
        };
        let result = runner
            .analyze(Path::new("a.c"), "c11", Duration::from_secs(5))
            .await;
        assert!(matches!(result, Err(ToolError::Io(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_with_output_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-tidy");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"$1:1:1: error: fake failure\"\nexit 1\n",
        )
        .unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = ClangTidyRunner {
            binary: script,
            checks: None,
            args: Vec::new(),
            working_dir: dir.path().to_path_buf(),
        };
        let output = runner
            .analyze(Path::new("a.c"), "c11", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(output.exit_code, 1);
        assert_eq!(output.stdout.trim(), "a.c:1:1: error: fake failure");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_without_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-tidy");
        std::fs::write(&script, "#!/bin/sh\necho boom >&2\nexit 3\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = ClangTidyRunner {
            binary: script,
            checks: None,
            args: Vec::new(),
            working_dir: dir.path().to_path_buf(),
        };
        let result = runner
            .analyze(Path::new("a.c"), "c11", Duration::from_secs(5))
            .await;
        match result {
            Err(ToolError::NonZeroExit { code, stderr }) => {
                assert_eq!(code, 3);
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
