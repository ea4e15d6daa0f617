//! Time utilities: elapsed-seconds formatting.

/// `HH:MM:SS`, zero padded. Hours are unbounded: 30h → `30:00:00`.
pub fn format_elapsed_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
