/*!
 * Error types for the seasons-sync application.
 *
 * Only two conditions abort a run: the source workbook cannot be read or
 * parsed, and the output document cannot be written. Row-level and
 * field-level problems are not errors; see `extraction::RowOutcome`.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the source workbook
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file could not be opened or read
    #[error("Failed to read source document {path:?}: {source}")]
    Read {
        /// Path of the source document
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed XML
    #[error("Malformed source document {path:?}: {reason}")]
    Malformed {
        /// Path of the source document (empty for in-memory input)
        path: PathBuf,
        /// Parser message, including the byte position when known
        reason: String,
    },

    /// Well-formed XML whose root element is not a spreadsheet workbook
    #[error("Source document {path:?} is not a spreadsheet workbook (root element: {root})")]
    NotAWorkbook {
        path: PathBuf,
        root: String,
    },
}

impl SourceError {
    /// Attach a path to an error produced while parsing in-memory content
    pub fn with_path(self, new_path: PathBuf) -> Self {
        match self {
            Self::Read { source, .. } => Self::Read { path: new_path, source },
            Self::Malformed { reason, .. } => Self::Malformed { path: new_path, reason },
            Self::NotAWorkbook { root, .. } => Self::NotAWorkbook { path: new_path, root },
        }
    }
}

/// Errors raised while writing the output document
#[derive(Error, Debug)]
pub enum WriteError {
    /// The document could not be serialized
    #[error("Failed to serialize output document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The destination could not be written
    #[error("Failed to write output document {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading the source workbook
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error writing the output document
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
