use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{open_store, validate_patient_id};
use crate::core::watch::WatchLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { patient, seconds } = cmd {
        let patient_id = validate_patient_id(patient)?;
        let store = open_store(cfg)?;
        WatchLogic::watch(&store, patient_id, *seconds, cfg.tick_interval_ms)?;
    }

    Ok(())
}
