//! Unified application error type.
//! Store, codec, view, metrics and cli all return AppError so that every
//! failure stays local to the action that caused it.

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
    // Storage
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("No event with id {0}")]
    NotFound(i64),

    // ---------------------------
    // Validation of caregiver input
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Report error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
