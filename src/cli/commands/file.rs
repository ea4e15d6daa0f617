use super::parse_category;
use crate::cli::parser::{Commands, FileAction};
use crate::config::Config;
use crate::core::files::FileLogic;
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::File { action } = cmd {
        match action {
            FileAction::Add {
                patient,
                paths,
                category,
            } => {
                let patient_id = validate_patient_id(patient)?;
                let category = category.as_deref().map(parse_category).transpose()?;
                let mut store = open_store(cfg)?;
                FileLogic::add(&mut store, patient_id, paths, category)?;
            }
            FileAction::Remove { patient, id } => {
                let patient_id = validate_patient_id(patient)?;
                let mut store = open_store(cfg)?;
                FileLogic::remove(&mut store, patient_id, id)?;
            }
            FileAction::Category {
                patient,
                id,
                category,
            } => {
                let patient_id = validate_patient_id(patient)?;
                let category = parse_category(category)?;
                let mut store = open_store(cfg)?;
                FileLogic::set_category(&mut store, patient_id, id, category)?;
            }
        }
    }

    Ok(())
}
