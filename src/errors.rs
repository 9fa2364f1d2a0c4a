//! Unified application error type.
//! All modules (docx, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Document-related
    // ---------------------------
    #[error("Document archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid document: {0}")]
    Docx(String),

    #[error("XML parsing error: {0}")]
    Xml(String),

    #[error("Table '{0}' not found in document")]
    MissingTable(String),

    #[error("Ticket has no priority label; use --priority to supply one")]
    MissingPriority,

    #[error("Cannot parse update text: {0}")]
    UpdateParse(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: no rule for priority '{0}'")]
    UnknownPriority(String),

    #[error("Configuration error: invalid duty day window {0}")]
    InvalidDutyWindow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
