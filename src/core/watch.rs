use crate::core::elapsed::{current_elapsed_display, current_elapsed_seconds};
use crate::core::store::{FileStore, require_draft};
use crate::core::ticker::DisplayTicker;
use crate::errors::AppResult;
use crate::store::{Clock, SystemClock};
use crate::ui::messages::{info, overwrite_line};
use std::thread;
use std::time::Duration;

pub struct WatchLogic;

impl WatchLogic {
    /// Live timer view for `seconds` seconds. Ticks only re-render; the
    /// stored draft is never written. The ticker is dropped on return.
    pub fn watch(store: &FileStore, patient_id: &str, seconds: u64, tick_ms: u64) -> AppResult<()> {
        let draft = require_draft(store, patient_id)?.clone();
        let now = store.clock().now();

        if !draft.is_session_running {
            info(format!(
                "Session not running. Elapsed: {}",
                current_elapsed_display(&draft, now)
            ));
            return Ok(());
        }

        let label = format!("⏱️  {} [{}]", draft.session_name, patient_id);
        overwrite_line(format!("{} {}", label, current_elapsed_display(&draft, now)));

        let snapshot = draft.clone();
        let ticker = DisplayTicker::start(Duration::from_millis(tick_ms), move |_| {
            let now = SystemClock.now();
            overwrite_line(format!("{} {}", label, current_elapsed_display(&snapshot, now)));
        });

        thread::sleep(Duration::from_secs(seconds));
        let ticks = ticker.cancel();
        println!();

        info(format!(
            "Stopped watching after {} tick(s); elapsed now {}s.",
            ticks,
            current_elapsed_seconds(&draft, store.clock().now())
        ));
        Ok(())
    }
}
