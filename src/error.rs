//! Typed failure values for load and evaluation
//!
//! Replaces generic `Result<T, String>` with a concrete error type that
//! carries an optional cause, so a failed load can be walked as a chain of
//! causally linked failures by the diagnostic translator.

use std::error::Error as StdError;
use std::fmt;

/// A failure raised while reading, evaluating, or loading source.
///
/// The `cause` link forms the chain the diagnostic translator walks:
/// outermost failure first, root cause last.
#[derive(Debug)]
pub struct LoadError {
    message: String,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        LoadError {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying failure this one wraps.
    pub fn caused_by(mut self, cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Create a read failure for a source file.
    pub fn file_read(path: &str, err: std::io::Error) -> Self {
        LoadError::new(format!("Failed to read file {}: {}", path, err))
    }

    /// The failure's own message, without its causes.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for LoadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}
