//! CLI output.
//!
//! Handlers print through these helpers so one flag decides the format:
//! colored text for people, or one `{"type", "payload"}` JSON object per
//! line for scripts. Quiet mode keeps only warnings and errors.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// How the current process reports to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Human,
    Quiet,
    Json,
}

impl Mode {
    /// `--json` wins over `--quiet`; a script still wants its lines.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Human,
        }
    }
}

static MODE: OnceLock<Mode> = OnceLock::new();

/// Fix the output mode for the rest of the process. Later calls are ignored.
pub fn configure(mode: Mode) {
    let _ = MODE.set(mode);
}

fn mode() -> Mode {
    MODE.get().copied().unwrap_or_default()
}

/// Print one regular item, either as a JSON line or through `human`.
fn emit(kind: &str, payload: Value, human: impl FnOnce()) {
    match mode() {
        Mode::Json => println!("{}", json!({ "type": kind, "payload": payload })),
        Mode::Quiet => {}
        Mode::Human => human(),
    }
}

/// Print the application name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "copurchase", "version": version }),
        || {
            println!("{} {}", "copurchase".bold(), version.dimmed());
            println!();
        },
    );
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        || println!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Print a warning. Shown even in quiet mode.
pub fn warning(message: &str) {
    match mode() {
        Mode::Json => println!(
            "{}",
            json!({ "type": "warning", "payload": { "message": message } })
        ),
        Mode::Quiet | Mode::Human => println!("  {} {}", "⚠".yellow(), message),
    }
}

/// Print an error to stderr. Shown even in quiet mode.
pub fn error(message: &str) {
    match mode() {
        Mode::Json => eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        ),
        Mode::Quiet | Mode::Human => eprintln!("  {} {}", "×".red(), message),
    }
}

/// Print a ranked listing. `columns` pairs each heading with its width.
///
/// In JSON mode the whole table is a single line so a script reads one
/// object per query.
pub fn table(columns: &[(&str, usize)], rows: &[Vec<String>]) {
    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    emit("table", json!({ "columns": names, "rows": rows }), || {
        for (idx, line) in render_table(columns, rows).iter().enumerate() {
            if idx < 2 {
                println!("{}", line.dimmed());
            } else {
                println!("{line}");
            }
        }
    });
}

fn padded_line<'a>(cells: impl Iterator<Item = (&'a str, usize)>) -> String {
    let cells: Vec<String> = cells
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect();
    format!("  {}", cells.join(" "))
}

/// Heading, rule, then one right-aligned line per row.
fn render_table(columns: &[(&str, usize)], rows: &[Vec<String>]) -> Vec<String> {
    let widths = || columns.iter().map(|(_, width)| *width);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(padded_line(columns.iter().copied()));
    let rule: Vec<String> = widths().map(|width| "─".repeat(width)).collect();
    lines.push(format!("  {}", rule.join(" ")));
    for row in rows {
        lines.push(padded_line(row.iter().map(String::as_str).zip(widths())));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins_over_quiet() {
        assert_eq!(Mode::from_flags(true, true), Mode::Json);
        assert_eq!(Mode::from_flags(true, false), Mode::Json);
        assert_eq!(Mode::from_flags(false, true), Mode::Quiet);
        assert_eq!(Mode::from_flags(false, false), Mode::Human);
    }

    #[test]
    fn table_cells_align_to_column_widths() {
        let lines = render_table(
            &[("Rank", 4), ("Product", 7)],
            &[
                vec!["1".to_string(), "42".to_string()],
                vec!["2".to_string(), "7".to_string()],
            ],
        );

        assert_eq!(
            lines,
            vec![
                "  Rank Product",
                "  ──── ───────",
                "     1      42",
                "     2       7",
            ]
        );
    }

    #[test]
    fn empty_table_keeps_heading() {
        assert_eq!(render_table(&[("Score", 5)], &[]).len(), 2);
    }
}
