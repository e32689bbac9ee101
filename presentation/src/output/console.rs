//! Console output formatter for results and history

use crate::catalog::{CATALOG, category_info};
use crate::output::formatter::OutputFormatter;
use chrono::{Local, TimeZone};
use colored::Colorize;
use omni_domain::{Category, HistoryEntry, HistoryLog, Score, SessionState};

/// Maximum lines of prompt/result shown per history row
const PREVIEW_LINES: usize = 2;

/// Formats controller state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Five stars, filled up to `score`
    pub fn stars(score: Option<Score>) -> String {
        let filled = score.map(|s| s.value()).unwrap_or(0) as usize;
        let empty = (Score::MAX as usize).saturating_sub(filled);
        format!("{}{}", "★".repeat(filled).yellow(), "☆".repeat(empty).dimmed())
    }

    /// Render an epoch-milliseconds timestamp in local time
    pub fn local_time(timestamp: i64) -> String {
        match Local.timestamp_millis_opt(timestamp).single() {
            Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => timestamp.to_string(),
        }
    }

    /// Category list with the selected one marked
    pub fn format_categories(selected: Category) -> String {
        let mut output = String::new();
        for info in &CATALOG {
            let marker = if info.category == selected { "*" } else { " " };
            output.push_str(&format!(
                " {} {:<13} {}\n",
                marker.green().bold(),
                info.category.as_str(),
                info.display_name.dimmed()
            ));
        }
        output
    }

    /// One-line summary of the session
    pub fn format_status(session: &SessionState, history_len: usize) -> String {
        let info = category_info(session.selected_category);
        let phase = if session.is_generating() {
            "generating".yellow()
        } else {
            "idle".green()
        };
        format!(
            "{} {}  {} {}  {} {}",
            "Category:".bold(),
            info.display_name,
            "State:".bold(),
            phase,
            "History:".bold(),
            history_len
        )
    }

    fn preview(text: &str) -> String {
        let mut lines: Vec<&str> = text.lines().take(PREVIEW_LINES).collect();
        if text.lines().count() > PREVIEW_LINES {
            lines.push("…");
        }
        lines.join("\n    ")
    }

    fn format_entry(index: usize, entry: &HistoryEntry) -> String {
        let info = category_info(entry.category);
        let mut output = format!(
            "{} {}",
            format!("[{}]", index + 1).cyan().bold(),
            info.display_name.magenta().bold()
        );
        if entry.rating.is_some() {
            output.push_str(&format!("  {}", Self::stars(entry.score())));
        }
        output.push_str(&format!("  {}\n", Self::local_time(entry.timestamp).dimmed()));
        output.push_str(&format!("    {}\n", Self::preview(&entry.prompt)));
        output.push_str(&format!("    {}\n", Self::preview(&entry.result).dimmed()));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_session(&self, session: &SessionState) -> String {
        if !session.has_result() {
            return format!("{}\n", "No result yet".dimmed());
        }

        let info = category_info(session.selected_category);
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Model:".cyan().bold(),
            info.display_name
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Prompt:".cyan().bold(),
            session.current_prompt
        ));
        output.push_str(&session.current_result);
        output.push('\n');
        if session.current_rating.is_some() {
            output.push_str(&format!("\n{}\n", Self::stars(session.current_rating)));
        }
        output
    }

    fn format_history(&self, history: &HistoryLog) -> String {
        let mut output = Self::header("Chat History");
        output.push('\n');

        if history.is_empty() {
            output.push_str(&format!("\n{}\n", "No chat history yet".dimmed()));
            return output;
        }

        for (index, entry) in history.entries().iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::format_entry(index, entry));
        }
        output
    }
}
