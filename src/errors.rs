//! Unified application error type.
//! All modules (store, db, core, cli) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid patient id: '{0}'")]
    InvalidPatientId(String),

    #[error("Invalid session type: {0}")]
    InvalidSessionType(String),

    #[error("Invalid protocol type: {0}")]
    InvalidProtocolType(String),

    #[error("Invalid file category: {0}")]
    InvalidFileCategory(String),

    #[error("Invalid evolution status: {0}")]
    InvalidEvolutionStatus(String),

    #[error("Invalid evolution progress: {0} (allowed: 10, 20, ..., 100)")]
    InvalidProgress(u8),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No draft found for patient {0}")]
    NoDraft(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
