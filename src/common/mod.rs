//! Common utilities shared across the walker

pub mod error;
pub mod logging;

pub use error::{Error, Result};
