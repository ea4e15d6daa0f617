pub mod backup;
pub mod config;
pub mod evolution;
pub mod export;
pub mod file;
pub mod finish;
pub mod init;
pub mod list;
pub mod log;
pub mod open;
pub mod protocol;
pub mod reset;
pub mod save;
pub mod show;
pub mod start;
pub mod update;
pub mod watch;

use crate::errors::{AppError, AppResult};
use crate::models::{EvolutionStatus, FileCategory, ProtocolType, SessionType};

pub(crate) fn parse_session_type(raw: Option<&String>) -> AppResult<Option<SessionType>> {
    raw.map(|s| SessionType::from_code(s).ok_or_else(|| AppError::InvalidSessionType(s.clone())))
        .transpose()
}

pub(crate) fn parse_protocol_type(raw: &str) -> AppResult<ProtocolType> {
    ProtocolType::from_code(raw).ok_or_else(|| AppError::InvalidProtocolType(raw.to_string()))
}

pub(crate) fn parse_category(raw: &str) -> AppResult<FileCategory> {
    FileCategory::from_code(raw).ok_or_else(|| AppError::InvalidFileCategory(raw.to_string()))
}

pub(crate) fn parse_status(raw: &str) -> AppResult<EvolutionStatus> {
    EvolutionStatus::from_code(raw).ok_or_else(|| AppError::InvalidEvolutionStatus(raw.to_string()))
}
