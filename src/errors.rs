//! Unified application error type.
//! Storage failures are the only fatal condition of the log store; everything
//! else here is raised by the CLI when user input cannot be understood.
//! Malformed data already on disk is never an error: it is normalized on load.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid log kind: {0}")]
    InvalidKind(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    #[error("Invalid recognizer output: {0}")]
    InvalidSpans(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
