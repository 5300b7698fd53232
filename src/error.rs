//! Error types for analysis requests.
//!
//! Missing symbols are not errors: queries return `None` for them. Errors
//! are reserved for bad caller input and collaborator failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Position outside the document, or not representable.
    #[error("Invalid position {line}:{character} in {}", path.display())]
    InvalidPosition {
        path: PathBuf,
        line: u32,
        character: u32,
    },

    /// No document handle exists for the path.
    #[error("Unknown document: {}", .0.display())]
    UnknownDocument(PathBuf),

    /// The document has no analysis result yet.
    #[error("Document not analyzed: {}", .0.display())]
    NotAnalyzed(PathBuf),

    /// The compiler front end failed.
    #[error("Analysis of {} failed: {message}", path.display())]
    Analyzer { path: PathBuf, message: String },
}

impl AnalysisError {
    /// Create an invalid position error.
    pub fn invalid_position(path: impl Into<PathBuf>, line: u32, character: u32) -> Self {
        Self::InvalidPosition {
            path: path.into(),
            line,
            character,
        }
    }

    /// Create an analyzer failure.
    pub fn analyzer(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Analyzer {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
