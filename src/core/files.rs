use crate::core::store::FileStore;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::{FileCategory, FileUpload};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

pub struct FileLogic;

impl FileLogic {
    /// Build an upload from a path on disk (name + size).
    pub fn upload_from_path(path: &Path, category: Option<FileCategory>) -> AppResult<FileUpload> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(AppError::Other(format!("{} is not a file", path.display())));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(FileUpload {
            file_name: name,
            size_bytes: meta.len(),
            category,
        })
    }

    pub fn add(
        store: &mut FileStore,
        patient_id: &str,
        paths: &[String],
        category: Option<FileCategory>,
    ) -> AppResult<Vec<String>> {
        // All paths are checked before the draft is touched.
        let uploads = paths
            .iter()
            .map(|p| Self::upload_from_path(Path::new(p), category))
            .collect::<AppResult<Vec<_>>>()?;

        let names: Vec<String> = uploads.iter().map(|u| u.file_name.clone()).collect();
        let ids = store.add_files(patient_id, uploads)?;

        audit_or_warn(
            store.storage().conn(),
            "file_add",
            patient_id,
            &names.join(", "),
        );
        for (id, name) in ids.iter().zip(&names) {
            success(format!("File '{}' attached: {}", name, id));
        }
        Ok(ids)
    }

    pub fn remove(store: &mut FileStore, patient_id: &str, file_id: &str) -> AppResult<()> {
        if !Self::exists(store, patient_id, file_id) {
            warning(format!("File {} not found: nothing removed.", file_id));
            return store.ensure_draft(patient_id);
        }

        store.remove_file(patient_id, file_id)?;
        audit_or_warn(store.storage().conn(), "file_del", patient_id, file_id);
        success(format!("File {} removed.", file_id));
        Ok(())
    }

    pub fn set_category(
        store: &mut FileStore,
        patient_id: &str,
        file_id: &str,
        category: FileCategory,
    ) -> AppResult<()> {
        if !Self::exists(store, patient_id, file_id) {
            warning(format!("File {} not found: nothing changed.", file_id));
            return store.ensure_draft(patient_id);
        }

        store.update_file_category(patient_id, file_id, category)?;
        audit_or_warn(
            store.storage().conn(),
            "file_edit",
            patient_id,
            &format!("{} → {}", file_id, category.as_str()),
        );
        success(format!("File {} moved to category '{}'.", file_id, category.as_str()));
        Ok(())
    }

    fn exists(store: &FileStore, patient_id: &str, file_id: &str) -> bool {
        store
            .draft(patient_id)
            .and_then(|d| d.file(file_id))
            .is_some()
    }
}
