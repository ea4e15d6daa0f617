use super::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::evolution::{EvolutionChange, EvolutionLogic};
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Evolution {
        patient,
        enable,
        disable,
        progress,
        status,
    } = cmd
    {
        let patient_id = validate_patient_id(patient)?;

        let enabled = match (*enable, *disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let change = EvolutionChange {
            enabled,
            progress: *progress,
            status: status.as_deref().map(parse_status).transpose()?,
        };

        let mut store = open_store(cfg)?;
        EvolutionLogic::apply(&mut store, patient_id, change)?;
    }

    Ok(())
}
