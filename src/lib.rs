//! Readme walker - an interactive onboarding runner
//!
//! Walks a learner through a lesson one instruction at a time, then hands
//! the terminal to the test runner once they type the trigger token.

pub mod common;
pub mod host;
pub mod lesson;
pub mod walker;

pub use common::{Error, Result};
pub use host::{Host, SystemHost, TestRun};
pub use lesson::Lesson;
pub use walker::{Phase, Report, Walker};
