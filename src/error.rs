//! Errors raised while building a canvas.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a [`Canvas`](crate::Canvas) from being built.
///
/// Both variants are detected before any scanning starts; once a grid
/// exists, tracing and text extraction cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tab width must be at least one column.
    #[error("tab width must be at least 1, got {0}")]
    TabWidth(usize),

    /// The input is not valid UTF-8. `line` is 1-based.
    #[error("invalid UTF-8 encoding on line {line}")]
    Decode { line: usize },
}
