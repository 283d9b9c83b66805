//! Unified application error type.
//! All modules (core, store, report, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0} (expected RFC 3339)")]
    InvalidTimestamp(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid punch data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid punch data: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Domain rejections
    // ---------------------------
    #[error("All punches for {0} have already been registered")]
    DayExhausted(String),

    #[error("No punches found for employee {0}")]
    UnknownEmployee(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Unsupported punch store format: {0} (expected .json or .csv)")]
    UnsupportedStore(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Document error: {0}")]
    Pdf(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
