use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Snapshot the database into `dest_file` (optionally zipped).
    /// Returns the path of the final artifact.
    pub fn backup(pool: &DbPool, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);
        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        ensure_writable(&final_path, force)?;
        ensure_parent_dir(&final_path)?;

        // The snapshot never shares a path with the archive it feeds.
        let snapshot = if compress {
            dest.with_extension("sqlite.tmp")
        } else {
            final_path.clone()
        };
        // VACUUM INTO refuses an existing target.
        if snapshot.exists() {
            fs::remove_file(&snapshot)?;
        }

        // VACUUM INTO gives a consistent copy even with the connection open.
        let snapshot_str = snapshot.to_string_lossy().to_string();
        pool.conn.execute("VACUUM INTO ?1", [snapshot_str.as_str()])?;

        if compress {
            let entry_name = archive_entry_name(&final_path)?;
            let zipped = compress_backup(&snapshot, &final_path, &entry_name);
            if let Err(e) = fs::remove_file(&snapshot) {
                warning(format!("Failed to remove temporary snapshot: {}", e));
            }
            zipped?;
        }

        success(format!("Backup created: {}", final_path.display()));

        audit_or_warn(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// `backup.zip` holds `backup.sqlite`.
fn archive_entry_name(zip_path: &Path) -> AppResult<String> {
    zip_path
        .with_extension("sqlite")
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path {}", zip_path.display())))
}

/// Write `snapshot` into a new zip archive at `zip_path`.
fn compress_backup(snapshot: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(snapshot)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;
    Ok(())
}
