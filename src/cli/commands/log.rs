use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let storage = SqliteStorage::open(&cfg.database)?;
        LogLogic::print_log(storage.conn())?;
    }

    Ok(())
}
