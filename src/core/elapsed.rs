//! Live elapsed time, derived from the stored instant on every read.

use crate::models::SessionDraft;
use crate::utils::time::format_elapsed_time;
use chrono::{DateTime, Utc};

/// Accumulated seconds plus, while running, the whole seconds since
/// `session_started_at`. Never cache the result: it moves with `now`.
pub fn current_elapsed_seconds(draft: &SessionDraft, now: DateTime<Utc>) -> u64 {
    if !draft.is_session_running {
        return draft.elapsed_seconds;
    }

    let running = draft
        .session_started_at
        .map(|started| ((now - started).num_milliseconds().max(0) / 1000) as u64)
        .unwrap_or(0);

    draft.elapsed_seconds + running
}

pub fn current_elapsed_display(draft: &SessionDraft, now: DateTime<Utc>) -> String {
    format_elapsed_time(current_elapsed_seconds(draft, now))
}
