use super::parse_session_type;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;
use crate::models::DraftPatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        patient,
        name,
        session_type,
        notes,
    } = cmd
    {
        let patient_id = validate_patient_id(patient)?;

        // parse before opening the store: bad input must not create a draft
        let patch = DraftPatch {
            session_name: name.clone(),
            session_type: parse_session_type(session_type.as_ref())?,
            notes: notes.clone(),
        };

        let mut store = open_store(cfg)?;
        SessionLogic::update(&mut store, patient_id, patch)?;
    }

    Ok(())
}
