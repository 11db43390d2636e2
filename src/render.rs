//! Semantic console formatting
//!
//! The session asks for a semantic level; this module decides how it looks.
//! `colored` honors its global override, so `--no-color` and non-tty output
//! degrade to plain text.

use colored::Colorize;

use crate::store::Task;

/// Semantic level for a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Section headings
    Title,
    /// Operation succeeded
    Success,
    /// Operation failed or input rejected
    Error,
    /// Nothing wrong, but worth noticing
    Warning,
}

/// Render text at a semantic level
pub fn paint(text: &str, level: Level) -> String {
    match level {
        Level::Title => text.cyan().bold().to_string(),
        Level::Success => text.green().to_string(),
        Level::Error => text.red().to_string(),
        Level::Warning => text.yellow().to_string(),
    }
}

/// Render a task as a single list line
pub fn task_line(task: &Task, date_format: &str) -> String {
    let status = if task.completed {
        "[completed]".green().to_string()
    } else {
        "[pending]".red().to_string()
    };

    format!(
        "{} | Name: {} | Category: {} | Due: {} | Status: {}",
        format!("ID: {}", task.id).yellow(),
        task.name,
        task.category,
        task.due.format(date_format),
        status
    )
}
