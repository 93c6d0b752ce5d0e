//! Lesson content
//!
//! The banner, the instruction list, the closing prompt and the collaborator
//! command lines live in an embedded TOML document. Nothing here is read from
//! disk or the environment at runtime.

use serde::Deserialize;

use crate::common::{Error, Result};

/// The embedded lesson document
const BUILTIN_LESSON: &str = include_str!("lesson.toml");

/// Everything the walker prints, and the commands it hands off to
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    /// Lines printed before the first gating read
    pub banner: Vec<String>,

    /// Instructions, printed in order, one per gating read
    pub instructions: Vec<String>,

    /// Prompt printed once all instructions are shown
    pub closing: String,

    /// Re-prompt printed after every input that is not the trigger
    pub reminder: String,

    /// Exact token that ends the confirmation loop
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// External collaborators
    #[serde(default)]
    pub commands: Collaborators,
}

/// Command lines for the two external capabilities
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Collaborators {
    /// Clears the terminal at startup
    #[serde(default = "default_clear")]
    pub clear: CommandLine,

    /// Runs the learner's test suite
    #[serde(default = "default_test")]
    pub test: CommandLine,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            clear: default_clear(),
            test: default_test(),
        }
    }
}

/// A program and its arguments
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

fn default_trigger() -> String {
    "learn".to_string()
}
fn default_clear() -> CommandLine {
    CommandLine::new("clear")
}
fn default_test() -> CommandLine {
    CommandLine::new("learn")
}

impl Lesson {
    /// Parse the lesson compiled into the binary
    ///
    /// Every call returns a fresh owned copy.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_LESSON)
    }

    /// Parse a lesson document
    pub fn parse(content: &str) -> Result<Self> {
        let lesson: Lesson =
            toml::from_str(content).map_err(|e| Error::LessonParse(e.to_string()))?;
        if lesson.trigger.is_empty() {
            return Err(Error::LessonParse("trigger must not be empty".to_string()));
        }
        Ok(lesson)
    }
}
