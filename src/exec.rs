use anyhow::{Context, Result, bail};
use std::process::{Command, ExitStatus, Output};

/// Result of a command execution.
///
/// For interactive runs the output streams are inherited by the child, so
/// `stdout`/`stderr` are empty and only `success`/`code` are meaningful.
#[derive(Debug)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl From<ExitStatus> for ExecResult {
    fn from(status: ExitStatus) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Abstraction over subprocess execution.
///
/// The package-manager and installer layers go through this trait so their
/// command construction can be tested without spawning real processes.
pub trait Executor {
    /// Run a command with captured output. Fails if the command exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run a command with captured output, allowing failure.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be spawned.
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run a command with stdio inherited from this process, allowing failure.
    ///
    /// Used for external tools whose output belongs on the user's terminal
    /// (dotbot, package managers).
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be spawned.
    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let result = self.run_unchecked(program, args)?;
        if !result.success {
            bail!(
                "{program} failed (exit {}): {}",
                result.code.unwrap_or(-1),
                result.stderr.trim()
            );
        }
        Ok(result)
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(output))
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(status))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Shared mock executor for unit tests.
///
/// Serves scripted responses in order and records every invocation as
/// `(program, args)` so tests can assert exact command lines.
#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{ExecResult, Executor};

    /// Scripted outcome for one executor call.
    #[derive(Debug, Clone)]
    pub enum Response {
        /// Command ran and exited zero, producing the given stdout.
        Success(String),
        /// Command ran but exited with the given non-zero code.
        Failure(i32),
        /// Command could not be spawned at all.
        SpawnError,
    }

    /// Queue-driven [`Executor`] double.
    #[derive(Debug, Default)]
    pub struct MockExecutor {
        responses: Mutex<VecDeque<Response>>,
        which_result: bool,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl MockExecutor {
        /// Every call succeeds with empty output.
        #[must_use]
        pub fn ok() -> Self {
            Self::with_responses(vec![Response::Success(String::new()); 16])
        }

        /// Every call fails with exit code 1.
        #[must_use]
        pub fn fail() -> Self {
            Self::with_responses(vec![Response::Failure(1); 16])
        }

        /// Serve the given responses in order; further calls fail.
        #[must_use]
        pub fn with_responses(responses: Vec<Response>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                which_result: true,
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the value returned by every [`Executor::which`] call.
        #[must_use]
        pub fn with_which(mut self, result: bool) -> Self {
            self.which_result = result;
            self
        }

        /// All `(program, args)` pairs recorded so far, in call order.
        #[must_use]
        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }

        /// Number of commands issued so far (`which` is not counted).
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn next(&self, program: &str, args: &[&str]) -> Response {
            self.calls.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|s| (*s).to_string()).collect(),
            ));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Response::Failure(1))
        }
    }

    impl Executor for MockExecutor {
        fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            match self.next(program, args) {
                Response::Success(stdout) => Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                }),
                Response::Failure(code) => anyhow::bail!("mock command failed (exit {code})"),
                Response::SpawnError => anyhow::bail!("mock spawn failure"),
            }
        }

        fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            match self.next(program, args) {
                Response::Success(stdout) => Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                }),
                Response::Failure(code) => Ok(ExecResult {
                    stdout: String::new(),
                    stderr: String::new(),
                    success: false,
                    code: Some(code),
                }),
                Response::SpawnError => anyhow::bail!("mock spawn failure"),
            }
        }

        fn run_interactive(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            self.run_unchecked(program, args)
        }

        fn which(&self, _: &str) -> bool {
            self.which_result
        }
    }
}
