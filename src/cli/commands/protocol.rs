use super::parse_protocol_type;
use crate::cli::parser::{Commands, ProtocolAction};
use crate::config::Config;
use crate::core::protocol::ProtocolLogic;
use crate::core::store::{open_store, validate_patient_id};
use crate::errors::AppResult;
use crate::models::ProtocolPatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Protocol { action } = cmd {
        match action {
            ProtocolAction::Add {
                patient,
                protocol_type,
            } => {
                let patient_id = validate_patient_id(patient)?;
                let t = parse_protocol_type(protocol_type)?;
                let mut store = open_store(cfg)?;
                ProtocolLogic::add(&mut store, patient_id, t)?;
            }
            ProtocolAction::Update {
                patient,
                id,
                protocol_type,
                content,
            } => {
                let patient_id = validate_patient_id(patient)?;
                let patch = ProtocolPatch {
                    protocol_type: protocol_type
                        .as_deref()
                        .map(parse_protocol_type)
                        .transpose()?,
                    content: content.clone(),
                };
                let mut store = open_store(cfg)?;
                ProtocolLogic::update(&mut store, patient_id, id, patch)?;
            }
            ProtocolAction::Remove { patient, id } => {
                let patient_id = validate_patient_id(patient)?;
                let mut store = open_store(cfg)?;
                ProtocolLogic::remove(&mut store, patient_id, id)?;
            }
        }
    }

    Ok(())
}
