use crate::core::elapsed::current_elapsed_display;
use crate::core::resume::{ResumeDecision, resume_decision};
use crate::core::store::{FileStore, require_draft};
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::models::{DraftPatch, SessionState};
use crate::store::Clock;
use crate::ui::messages::{field, header, info, success, warning};
use crate::utils::date::{format_local, format_optional};
use crate::utils::formatting::{colorize_state, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_elapsed_time;

pub struct SessionLogic;

impl SessionLogic {
    /// Host entry point: make sure a draft exists and decide between
    /// resuming it and starting over.
    pub fn open(store: &mut FileStore, patient_id: &str, start_over: bool) -> AppResult<()> {
        let existing = store.draft(patient_id).cloned();
        store.ensure_draft(patient_id)?;

        match existing {
            None => {
                success(format!("New draft created for patient {}", patient_id));
                audit_or_warn(store.storage().conn(), "open", patient_id, "Draft created");
            }
            Some(draft) if resume_decision(&draft) == ResumeDecision::Prompt => {
                let saved = format_optional(draft.last_saved_at.as_ref());
                if start_over {
                    store.reset_draft(patient_id)?;
                    warning(format!(
                        "Discarded draft saved at {}, starting over.",
                        saved
                    ));
                    audit_or_warn(
                        store.storage().conn(),
                        "reset",
                        patient_id,
                        "Start over on open",
                    );
                } else {
                    info(format!(
                        "Resuming draft '{}' saved at {} (use --start-over to discard it).",
                        draft.session_name, saved
                    ));
                }
            }
            Some(draft) => {
                if start_over {
                    store.reset_draft(patient_id)?;
                    warning("Existing draft discarded, starting over.");
                    audit_or_warn(
                        store.storage().conn(),
                        "reset",
                        patient_id,
                        "Start over on open",
                    );
                } else {
                    info(format!(
                        "Opened draft '{}' ({}).",
                        draft.session_name,
                        draft.state().as_str()
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn update(store: &mut FileStore, patient_id: &str, patch: DraftPatch) -> AppResult<()> {
        if patch.is_empty() {
            warning("Nothing to update: pass --name, --type or --notes.");
            return Ok(());
        }

        let mut changed = Vec::new();
        if patch.session_name.is_some() {
            changed.push("name");
        }
        if patch.session_type.is_some() {
            changed.push("type");
        }
        if patch.notes.is_some() {
            changed.push("notes");
        }

        store.update_draft(patient_id, patch)?;

        let msg = format!("Updated {}", changed.join(", "));
        audit_or_warn(store.storage().conn(), "update", patient_id, &msg);
        success(format!("{} for patient {}", msg, patient_id));
        Ok(())
    }

    pub fn start(store: &mut FileStore, patient_id: &str) -> AppResult<()> {
        if store.draft(patient_id).map(|d| d.state()) == Some(SessionState::Running) {
            info(format!("Session for patient {} is already running.", patient_id));
            return Ok(());
        }

        store.start_session(patient_id)?;
        let draft = require_draft(store, patient_id)?;

        let msg = format!(
            "Session started (accumulated {})",
            format_elapsed_time(draft.elapsed_seconds)
        );
        audit_or_warn(store.storage().conn(), "start", patient_id, &msg);
        success(format!("{} for patient {}", msg, patient_id));
        Ok(())
    }

    pub fn finish(store: &mut FileStore, patient_id: &str) -> AppResult<()> {
        if store.draft(patient_id).map(|d| d.state()) != Some(SessionState::Running) {
            info(format!("No running session for patient {}.", patient_id));
            store.ensure_draft(patient_id)?;
            return Ok(());
        }

        store.finish_session(patient_id)?;
        let draft = require_draft(store, patient_id)?;

        let msg = format!(
            "Session finished, total {}",
            format_elapsed_time(draft.elapsed_seconds)
        );
        audit_or_warn(store.storage().conn(), "finish", patient_id, &msg);
        success(format!("{} for patient {}", msg, patient_id));
        Ok(())
    }

    /// "Exit" action: stamp the save marker.
    pub fn save(store: &mut FileStore, patient_id: &str) -> AppResult<()> {
        store.save_draft(patient_id)?;
        let draft = require_draft(store, patient_id)?;
        let saved = format_optional(draft.last_saved_at.as_ref());

        audit_or_warn(store.storage().conn(), "save", patient_id, "Draft saved");
        success(format!("Draft for patient {} saved at {}", patient_id, saved));
        Ok(())
    }

    pub fn reset(store: &mut FileStore, patient_id: &str) -> AppResult<()> {
        store.reset_draft(patient_id)?;
        audit_or_warn(store.storage().conn(), "reset", patient_id, "Draft reset");
        success(format!("Draft for patient {} reset.", patient_id));
        Ok(())
    }

    pub fn show(store: &FileStore, patient_id: &str, as_json: bool) -> AppResult<()> {
        let draft = require_draft(store, patient_id)?;
        let now = store.clock().now();

        if as_json {
            println!("{}", serde_json::to_string_pretty(draft)?);
            return Ok(());
        }

        header(format!("Patient {}", patient_id));
        field("Name", &draft.session_name);
        field("Type", draft.session_type.as_str());
        field("State", colorize_state(draft.state()));
        field("Elapsed", current_elapsed_display(draft, now));
        if let Some(started) = &draft.session_started_at {
            field("Started at", format_local(started));
        }
        field("Last saved", format_optional(draft.last_saved_at.as_ref()));
        field(
            "Notes",
            if draft.notes.is_empty() {
                "--".to_string()
            } else {
                truncate(&draft.notes, 60)
            },
        );
        if draft.has_evolution {
            field(
                "Evolution",
                format!(
                    "{}% ({})",
                    draft.evolution_progress,
                    draft.evolution_status.as_str()
                ),
            );
        } else {
            field("Evolution", "disabled");
        }

        println!();
        if draft.protocols.is_empty() {
            println!("  No protocols.");
        } else {
            let mut table = Table::new(vec![
                Column::new("PROTOCOL ID", 36),
                Column::new("TYPE", 18),
                Column::new("CREATED", 19),
                Column::new("CONTENT", 40),
            ]);
            for p in &draft.protocols {
                table.add_row(vec![
                    p.id.clone(),
                    p.protocol_type.as_str().to_string(),
                    format_local(&p.created_at),
                    truncate(&p.content, 40),
                ]);
            }
            print!("{}", table.render());
        }

        println!();
        if draft.files.is_empty() {
            println!("  No files.");
        } else {
            let mut table = Table::new(vec![
                Column::new("FILE ID", 36),
                Column::new("NAME", 30),
                Column::new("CATEGORY", 9),
                Column::new("SIZE", 10),
            ]);
            for f in &draft.files {
                table.add_row(vec![
                    f.id.clone(),
                    truncate(&f.file_name, 30),
                    f.category.as_str().to_string(),
                    format!("{} KB", f.size_kb),
                ]);
            }
            print!("{}", table.render());
        }

        Ok(())
    }
}
