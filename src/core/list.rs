use crate::core::elapsed::current_elapsed_display;
use crate::core::store::FileStore;
use crate::errors::AppResult;
use crate::store::Clock;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_optional;
use crate::utils::formatting::{colorize_state, pad_right, truncate};
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    pub fn list(store: &FileStore) -> AppResult<()> {
        let drafts = store.drafts();
        if drafts.is_empty() {
            info("No drafts stored.");
            return Ok(());
        }

        let now = store.clock().now();
        let id_w = drafts.keys().map(|k| k.len()).max().unwrap_or(7).max(7);

        let mut table = Table::new(vec![
            Column::new("PATIENT", id_w),
            Column::new("NAME", 20),
            Column::new("TYPE", 9),
            Column::new("STATE", 11),
            Column::new("ELAPSED", 8),
            Column::new("PROT", 4),
            Column::new("FILES", 5),
            Column::new("LAST SAVED", 19),
        ]);

        for (patient_id, draft) in drafts {
            table.add_row(vec![
                patient_id.clone(),
                truncate(&draft.session_name, 20),
                draft.session_type.as_str().to_string(),
                // pad before coloring: escape codes break column widths
                colorize_state_padded(draft, 11),
                current_elapsed_display(draft, now),
                draft.protocols.len().to_string(),
                draft.files.len().to_string(),
                colorize_optional(&format_optional(draft.last_saved_at.as_ref())),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} draft(s).", drafts.len());
        Ok(())
    }
}

fn colorize_state_padded(draft: &crate::models::SessionDraft, width: usize) -> String {
    let state = draft.state();
    let padding = pad_right("", width.saturating_sub(state.as_str().len()));
    format!("{}{}", colorize_state(state), padding)
}
