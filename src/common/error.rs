//! Error types for the readme walker
//!
//! Messages are printed straight to the learner, so they say what to do next
//! where there is something to do.

use std::io;
use thiserror::Error;

use crate::walker::Phase;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the readme walker
#[derive(Error, Debug)]
pub enum Error {
    // === Terminal Errors ===
    #[error("Input ended while {phase} (after {reads} lines). Run 'readme' from an interactive terminal")]
    InputExhausted { phase: Phase, reads: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Collaborator Errors ===
    #[error("Failed to clear the screen: {0}")]
    ClearFailed(String),

    #[error("Test runner '{program}' not found. Searched PATH: {searched}")]
    TestRunnerNotFound { program: String, searched: String },

    #[error("Test runner failed to start: {0}")]
    TestRunnerFailed(String),

    // === Lesson Errors ===
    #[error("Invalid lesson document: {0}")]
    LessonParse(String),
}

impl Error {
    /// Create a test runner not found error using the current `PATH`
    pub fn test_runner_not_found(program: &str) -> Self {
        let searched = std::env::var_os("PATH")
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<unset>".to_string());
        Self::TestRunnerNotFound {
            program: program.to_string(),
            searched,
        }
    }
}
