use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

const FALLBACK_FORMAT: &str = "%d/%m/%Y";

/// Default label for a new draft: the instant's local date in `fmt`.
/// An invalid strftime pattern falls back to `%d/%m/%Y`.
pub fn default_session_name(now: DateTime<Utc>, fmt: &str) -> String {
    let pattern = if is_valid_format(fmt) {
        fmt
    } else {
        FALLBACK_FORMAT
    };
    now.with_timezone(&Local).format(pattern).to_string()
}

pub fn is_valid_format(fmt: &str) -> bool {
    !fmt.is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Local, human readable timestamp for CLI output.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn format_optional(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_local).unwrap_or_else(|| "--".to_string())
}
