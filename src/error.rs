//! Unified error types for character-ter.
//!
//! The metric core is pure computation over well-formed word sequences and
//! cannot fail; everything here covers the surrounding I/O and configuration
//! surface.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for character-ter operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CharacterError {
    /// Errors in the corpus input shape
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report generation errors
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error(
        "{hypothesis} lines in the hypothesis file, but {reference} lines in the reference file"
    )]
    LineCountMismatch { hypothesis: usize, reference: usize },

    #[error("the corpus contains no sentences")]
    EmptyCorpus,
}

/// Convenient Result type for character-ter operations
pub type Result<T> = std::result::Result<T, CharacterError>;

impl CharacterError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for mismatched corpus files
    pub fn line_count_mismatch(hypothesis: usize, reference: usize) -> Self {
        Self::input(
            "hypothesis and reference files must have the same number of sentences",
            InputErrorKind::LineCountMismatch {
                hypothesis,
                reference,
            },
        )
    }

    /// Create an input error for an empty corpus
    pub fn empty_corpus() -> Self {
        Self::input(
            "nothing to score",
            InputErrorKind::EmptyCorpus,
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for errors caused by the shape of the input corpus rather than
    /// the environment; the CLI maps these to their own exit code.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}

impl From<std::io::Error> for CharacterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CharacterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}
