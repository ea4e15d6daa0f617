use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// How long a writer waits on a lock held by another sessiondraft process
/// (for instance a running `watch`).
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Prepare a connection for draft storage: lock timeout, pending
/// migrations, and a check that the `kv_store` table is in place.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    run_pending_migrations(conn)?;

    let has_kv_store: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store')",
        [],
        |row| row.get(0),
    )?;
    if !has_kv_store {
        return Err(AppError::Other(
            "database schema incomplete: kv_store table missing".into(),
        ));
    }

    Ok(())
}
