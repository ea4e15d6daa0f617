use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let storage = SqliteStorage::open(&cfg.database)?;
        BackupLogic::backup(storage.pool(), file, *compress, *force)?;
    }

    Ok(())
}
