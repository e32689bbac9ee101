//! Slash command parsing

use omni_domain::Category;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Categories,
    SelectCategory(Category),
    Rate(u8),
    History,
    /// 0-based index into the history log
    Open(usize),
    Clear,
    Status,
    /// Anything that is not a slash command
    Prompt(String),
    /// Slash command that could not be understood, with a hint for the user
    Invalid(String),
}

/// Parse one line of input. Callers skip blank lines before calling.
pub fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return ReplCommand::Prompt(line.to_string());
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match name {
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/categories" | "/models" => ReplCommand::Categories,
        "/category" | "/c" if arg.is_empty() => {
            ReplCommand::Invalid("Usage: /category <id>".to_string())
        }
        "/category" | "/c" => match arg.parse::<Category>() {
            Ok(category) => ReplCommand::SelectCategory(category),
            Err(e) => ReplCommand::Invalid(e.to_string()),
        },
        "/rate" | "/r" => match arg.parse::<u8>() {
            Ok(score) => ReplCommand::Rate(score),
            Err(_) => ReplCommand::Invalid("Usage: /rate <1-5>".to_string()),
        },
        "/history" => ReplCommand::History,
        "/open" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => ReplCommand::Open(n - 1),
            _ => ReplCommand::Invalid("Usage: /open <n> (1 = newest)".to_string()),
        },
        "/clear" => ReplCommand::Clear,
        "/status" => ReplCommand::Status,
        other => ReplCommand::Invalid(format!("Unknown command: {}", other)),
    }
}
