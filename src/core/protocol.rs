use crate::core::store::FileStore;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::models::{ProtocolPatch, ProtocolType};
use crate::ui::messages::{success, warning};

pub struct ProtocolLogic;

impl ProtocolLogic {
    pub fn add(store: &mut FileStore, patient_id: &str, protocol_type: ProtocolType) -> AppResult<String> {
        let id = store.add_protocol(patient_id, protocol_type)?;

        audit_or_warn(
            store.storage().conn(),
            "protocol_add",
            patient_id,
            &format!("{} ({})", protocol_type.as_str(), id),
        );
        success(format!("{} protocol added: {}", protocol_type.label(), id));
        Ok(id)
    }

    pub fn update(
        store: &mut FileStore,
        patient_id: &str,
        protocol_id: &str,
        patch: ProtocolPatch,
    ) -> AppResult<()> {
        if !Self::exists(store, patient_id, protocol_id) {
            warning(format!("Protocol {} not found: nothing changed.", protocol_id));
            return store.ensure_draft(patient_id);
        }

        store.update_protocol(patient_id, protocol_id, patch)?;
        audit_or_warn(store.storage().conn(), "protocol_edit", patient_id, protocol_id);
        success(format!("Protocol {} updated.", protocol_id));
        Ok(())
    }

    pub fn remove(store: &mut FileStore, patient_id: &str, protocol_id: &str) -> AppResult<()> {
        if !Self::exists(store, patient_id, protocol_id) {
            warning(format!("Protocol {} not found: nothing removed.", protocol_id));
            return store.ensure_draft(patient_id);
        }

        store.remove_protocol(patient_id, protocol_id)?;
        audit_or_warn(store.storage().conn(), "protocol_del", patient_id, protocol_id);
        success(format!("Protocol {} removed.", protocol_id));
        Ok(())
    }

    fn exists(store: &FileStore, patient_id: &str, protocol_id: &str) -> bool {
        store
            .draft(patient_id)
            .and_then(|d| d.protocol(protocol_id))
            .is_some()
    }
}
