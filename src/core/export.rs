use crate::core::elapsed::current_elapsed_seconds;
use crate::core::store::FileStore;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json::write_json;
use crate::export::{DraftExport, ExportedDraft};
use crate::store::Clock;
use crate::ui::messages::success;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one patient's draft, or every draft when `patient_id` is None.
    pub fn export(
        store: &FileStore,
        file: &str,
        patient_id: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        let now = store.clock().now();

        let drafts: Vec<ExportedDraft<'_>> = match patient_id {
            Some(id) => {
                let (key, draft) = store
                    .drafts()
                    .get_key_value(id)
                    .ok_or_else(|| AppError::NoDraft(id.to_string()))?;
                vec![ExportedDraft {
                    patient_id: key,
                    current_elapsed_seconds: current_elapsed_seconds(draft, now),
                    draft,
                }]
            }
            None => store
                .drafts()
                .iter()
                .map(|(id, draft)| ExportedDraft {
                    patient_id: id,
                    current_elapsed_seconds: current_elapsed_seconds(draft, now),
                    draft,
                })
                .collect(),
        };

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        let count = drafts.len();
        write_json(
            path,
            &DraftExport {
                exported_at: now,
                drafts,
            },
        )?;

        audit_or_warn(
            store.storage().conn(),
            "export",
            patient_id.unwrap_or("all"),
            &format!("{} draft(s) → {}", count, path.display()),
        );
        success(format!("Exported {} draft(s) to {}", count, path.display()));
        Ok(count)
    }
}
