use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        patient,
        force,
    } = cmd
    {
        let patient_id = patient.as_deref().map(validate_patient_id).transpose()?;
        let store = open_store(cfg)?;
        ExportLogic::export(&store, file, patient_id, *force)?;
    }

    Ok(())
}
