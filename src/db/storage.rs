//! SQLite-backed [`DraftStorage`]: one row per storage key.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::DraftStorage;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open (or create) the database at `path` and run pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn path(&self) -> String {
        self.pool.path()
    }
}

impl DraftStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }
}
