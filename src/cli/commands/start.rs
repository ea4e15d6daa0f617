use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { patient } = cmd {
        let patient_id = validate_patient_id(patient)?;
        let mut store = open_store(cfg)?;
        SessionLogic::start(&mut store, patient_id)?;
    }

    Ok(())
}
