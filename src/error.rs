//! Error types for Scatterswitch.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scatterswitch operations.
pub type Result<T> = std::result::Result<T, ScatterError>;

/// Errors that can occur in Scatterswitch.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing column '{column}'")]
    MissingColumn {
        /// Column name.
        column: String,
    },

    /// A numeric column holds something that is not a number.
    #[error("Row {row}: column '{column}' is not numeric ({value:?})")]
    NonNumeric {
        /// 1-based data row.
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// The dataset has no records, so no scale domain exists.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A field identifier outside the candidate set.
    #[error("Unknown field: {id}")]
    UnknownField {
        /// The identifier as received.
        id: String,
    },

    /// Chart configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScatterError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a NonNumeric error.
    pub fn non_numeric(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonNumeric {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create an UnknownField error.
    pub fn unknown_field(id: impl Into<String>) -> Self {
        Self::UnknownField { id: id.into() }
    }

    /// Whether this error belongs to the fatal startup group (bad data or config).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Csv(_)
                | Self::MissingColumn { .. }
                | Self::NonNumeric { .. }
                | Self::EmptyDataset
                | Self::InvalidConfig(_)
        )
    }
}
