use crate::db::log::{LogEntry, load_entries};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use rusqlite::Connection;

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI colour per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "open" | "start" => Colour::Green,
        "finish" | "save" => Colour::Cyan,
        "reset" => Colour::Red,
        "update" | "evolution" => Colour::Yellow,
        "export" | "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        other if other.starts_with("protocol_") || other.starts_with("file_") => {
            Colour::RGB(120, 170, 255)
        }
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_entries(conn)?;
        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(60);

        for entry in &entries {
            let line = render_op_target(entry, 60);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&line).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                line,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// Coloured operation followed by the plain target, cut to `max` visible chars.
fn render_op_target(entry: &LogEntry, max: usize) -> String {
    let color = color_for_operation(&entry.operation);
    let visible = op_target(entry);

    let truncated = if visible.chars().count() > max {
        let mut s: String = visible.chars().take(max - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}
