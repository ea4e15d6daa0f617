//! Formatting utilities used for CLI and export outputs.

use crate::models::SessionState;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Cut to `max` characters, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// State label and ANSI color.
pub fn describe_state(state: SessionState) -> (String, &'static str) {
    match state {
        SessionState::NotStarted => (state.as_str().to_string(), GREY),
        SessionState::Running => (state.as_str().to_string(), GREEN),
        SessionState::Finished => (state.as_str().to_string(), YELLOW),
    }
}

pub fn colorize_state(state: SessionState) -> String {
    let (label, color) = describe_state(state);
    format!("{color}{label}{RESET}")
}
