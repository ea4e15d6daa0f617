use crate::core::store::FileStore;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::EvolutionStatus;
use crate::models::evolution::is_valid_progress;
use crate::ui::messages::{success, warning};

/// Requested evolution changes; each `None` is left alone.
#[derive(Debug, Clone, Default)]
pub struct EvolutionChange {
    pub enabled: Option<bool>,
    pub progress: Option<u8>,
    pub status: Option<EvolutionStatus>,
}

pub struct EvolutionLogic;

impl EvolutionLogic {
    pub fn apply(store: &mut FileStore, patient_id: &str, change: EvolutionChange) -> AppResult<()> {
        // The store accepts any value; the step list is enforced here.
        if let Some(p) = change.progress
            && !is_valid_progress(p)
        {
            return Err(AppError::InvalidProgress(p));
        }

        if change.enabled.is_none() && change.progress.is_none() && change.status.is_none() {
            warning("Nothing to change: pass --enable/--disable, --progress or --status.");
            return Ok(());
        }

        let mut parts = Vec::new();

        if let Some(enabled) = change.enabled {
            store.set_evolution_enabled(patient_id, enabled)?;
            parts.push(if enabled { "enabled".to_string() } else { "disabled".to_string() });
        }
        if let Some(progress) = change.progress {
            store.set_evolution_progress(patient_id, progress)?;
            parts.push(format!("progress {}%", progress));
        }
        if let Some(status) = change.status {
            store.set_evolution_status(patient_id, status)?;
            parts.push(format!("status {}", status.as_str()));
        }

        let msg = format!("Evolution {}", parts.join(", "));
        audit_or_warn(store.storage().conn(), "evolution", patient_id, &msg);
        success(format!("{} for patient {}", msg, patient_id));
        Ok(())
    }
}
