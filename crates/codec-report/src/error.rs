use std::path::PathBuf;

use thiserror::Error;

/// Coarse failure classes a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    EmptyResult,
    Write,
    Config,
}

/// Errors raised while producing a codec report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to open results file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed results file {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing column '{column}' in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid value '{value}' for column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("No rows matched codecs {codecs:?}")]
    EmptyResult { codecs: Vec<String> },

    #[error("Nothing to plot: the results table has no rows")]
    NothingToRender,

    #[error("Failed to write report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::Open { .. }
            | ReportError::Csv { .. }
            | ReportError::MissingColumn { .. }
            | ReportError::InvalidValue { .. } => ErrorCategory::Load,
            ReportError::EmptyResult { .. } | ReportError::NothingToRender => {
                ErrorCategory::EmptyResult
            }
            ReportError::Write { .. } => ErrorCategory::Write,
            ReportError::Config { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
