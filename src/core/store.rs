//! Opening the durable store used by the CLI.

use crate::config::Config;
use crate::db::storage::SqliteStorage;
use crate::errors::{AppError, AppResult};
use crate::store::{DraftStore, HydrationOutcome, StoreOptions, SystemClock};
use crate::ui::messages::warning;

pub type FileStore = DraftStore<SqliteStorage, SystemClock>;

/// Open the configured database and hydrate the store from it.
pub fn open_store(cfg: &Config) -> AppResult<FileStore> {
    let storage = SqliteStorage::open(&cfg.database)?;
    let (store, outcome) = DraftStore::open(storage, SystemClock, StoreOptions::from(cfg));

    if let HydrationOutcome::Discarded { reason } = &outcome {
        warning(format!(
            "Stored drafts could not be loaded ({}); starting from an empty store.",
            reason
        ));
    }

    Ok(store)
}

pub fn validate_patient_id(raw: &str) -> AppResult<&str> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(AppError::InvalidPatientId(raw.to_string()));
    }
    Ok(id)
}

/// Read-only commands must not invent drafts.
pub fn require_draft<'a>(
    store: &'a FileStore,
    patient_id: &str,
) -> AppResult<&'a crate::models::SessionDraft> {
    store
        .draft(patient_id)
        .ok_or_else(|| AppError::NoDraft(patient_id.to_string()))
}
