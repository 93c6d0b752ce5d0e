//! External collaborators
//!
//! The walker only needs two things from its environment: a way to clear the
//! screen and a way to run the test suite. Both sit behind [`Host`] so the
//! walker can be driven without spawning processes.

use std::process::{Command, ExitStatus};

use crate::common::{Error, Result};
use crate::lesson::{Collaborators, CommandLine};

/// Outcome of the test runner, recorded but never acted on by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestRun {
    /// Exit code, `None` if the runner was killed by a signal
    pub exit_code: Option<i32>,
    /// Signal that terminated the runner (Unix only)
    pub signal: Option<i32>,
}

impl TestRun {
    /// Status to exit with so the shell sees what the runner did
    ///
    /// A runner killed by a signal maps to `128 + signal`, as shells report it.
    pub fn process_exit_code(&self) -> i32 {
        self.exit_code
            .or_else(|| self.signal.map(|s| 128 + s))
            .unwrap_or(1)
    }
}

impl From<ExitStatus> for TestRun {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            exit_code: status.code(),
            signal,
        }
    }
}

/// Capabilities the walker borrows from its environment
pub trait Host {
    /// Clear the terminal
    fn clear_screen(&mut self) -> Result<()>;

    /// Run the learner's test suite in the foreground
    fn run_tests(&mut self) -> Result<TestRun>;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn run_tests(&mut self) -> Result<TestRun> {
        (**self).run_tests()
    }
}

/// Runs the collaborators as child processes sharing our terminal
#[derive(Debug, Clone)]
pub struct SystemHost {
    clear: CommandLine,
    test: CommandLine,
}

impl SystemHost {
    pub fn new(commands: &Collaborators) -> Self {
        Self {
            clear: commands.clear.clone(),
            test: commands.test.clone(),
        }
    }
}

impl Host for SystemHost {
    fn clear_screen(&mut self) -> Result<()> {
        tracing::debug!(program = %self.clear.program, "Clearing screen");

        let status = Command::new(&self.clear.program)
            .args(&self.clear.args)
            .status()
            .map_err(|e| Error::ClearFailed(e.to_string()))?;

        if !status.success() {
            return Err(Error::ClearFailed(format!(
                "'{}' exited with {}",
                self.clear.program, status
            )));
        }
        Ok(())
    }

    fn run_tests(&mut self) -> Result<TestRun> {
        let path = which::which(&self.test.program)
            .map_err(|_| Error::test_runner_not_found(&self.test.program))?;

        tracing::debug!(path = %path.display(), "Starting test runner");

        let status = Command::new(&path)
            .args(&self.test.args)
            .status()
            .map_err(|e| Error::TestRunnerFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(%status, "Test runner finished");
        Ok(status.into())
    }
}
