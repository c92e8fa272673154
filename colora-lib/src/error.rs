//! Error types for theme parsing and loading.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`Theme`](crate::theme::Theme).
///
/// A malformed declaration segment (no `:`) is not represented here: the
/// parser skips it and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Braces do not pair up, or a block was opened inside another block.
    #[error("unbalanced block at line {line}, column {column}: {message}")]
    UnbalancedBlock {
        message: String,
        line: u32,
        column: u32,
    },

    /// A `/*` comment that never reaches its `*/`.
    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    /// A declaration was set on a selector the theme does not know.
    #[error("unknown selector '{selector}'")]
    UnknownSelector { selector: String },

    /// The theme file could not be read.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn unbalanced(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::UnbalancedBlock {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn unknown_selector(selector: impl Into<String>) -> Self {
        Self::UnknownSelector {
            selector: selector.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
