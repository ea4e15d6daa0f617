use crate::errors::AppResult;
use crate::models::SessionDraft;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// One draft as written to an export file. `currentElapsedSeconds` is the
/// live value at export time, next to the stored counter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedDraft<'a> {
    pub patient_id: &'a str,
    pub current_elapsed_seconds: u64,
    pub draft: &'a SessionDraft,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftExport<'a> {
    pub exported_at: DateTime<Utc>,
    pub drafts: Vec<ExportedDraft<'a>>,
}

/// Write the export as pretty JSON.
pub fn write_json(path: &Path, export: &DraftExport<'_>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(export)?;
    std::fs::write(path, json)?;
    Ok(())
}
