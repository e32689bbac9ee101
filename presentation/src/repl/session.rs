//! REPL (Read-Eval-Print Loop) for interactive generation

use super::command::{ReplCommand, parse_command};
use crate::catalog::category_info;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use omni_application::{
    ControllerError, GenerateOutcome, HistoryStore, InteractionController, RateOutcome,
    ResultGenerator,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive REPL around one controller
pub struct OmniRepl<S: HistoryStore + 'static, G: ResultGenerator + 'static> {
    controller: InteractionController<S, G>,
    config: ReplConfig,
}

impl<S: HistoryStore + 'static, G: ResultGenerator + 'static> OmniRepl<S, G> {
    pub fn new(controller: InteractionController<S, G>, config: ReplConfig) -> Self {
        Self { controller, config }
    }

    /// Hand the controller back so the caller can shut it down
    pub fn into_controller(self) -> InteractionController<S, G> {
        self.controller
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.resolve_history_file();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = self.prompt_label();
            match rl.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());

                    if self.dispatch(parse_command(&line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt_label(&self) -> String {
        let session = self.controller.session();
        if session.history_view_active {
            "history> ".to_string()
        } else {
            format!("{}> ", session.selected_category)
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                   Omni AI                   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        self.print_placeholder();
        println!("Type /help for commands.");
        println!();
    }

    fn print_placeholder(&self) {
        let info = category_info(self.controller.session().selected_category);
        println!("{}", info.placeholder.dimmed());
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /category <id>   - Switch category");
        println!("  /categories      - List categories");
        println!("  /rate <1-5>      - Rate the latest result");
        println!("  /history         - Open or close the history view (newest first)");
        println!("  /open <n>        - Show history entry n again");
        println!("  /clear           - Delete all history");
        println!("  /status          - Show current state");
        println!("  /quit, /q        - Exit");
        println!();
        println!("Anything else is sent as a prompt.");
        println!();
    }

    /// Execute one command. Returns true if the loop should exit.
    async fn dispatch(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Categories => {
                print!(
                    "{}",
                    ConsoleFormatter::format_categories(
                        self.controller.session().selected_category
                    )
                );
            }
            ReplCommand::SelectCategory(category) => {
                self.controller.select_category(category);
                println!(
                    "Category: {}",
                    category_info(category).display_name.bold()
                );
                self.print_placeholder();
            }
            ReplCommand::Rate(score) => self.rate(score),
            ReplCommand::History => {
                self.controller.toggle_history_view();
                if self.controller.session().history_view_active {
                    print!(
                        "{}",
                        ConsoleFormatter.format_history(self.controller.history())
                    );
                    println!("{}", "Use /open <n> to show an entry again".dimmed());
                } else {
                    println!("History closed.");
                }
            }
            ReplCommand::Open(index) => match self.controller.select_history_entry(index) {
                Ok(_) => print!(
                    "{}",
                    ConsoleFormatter.format_session(self.controller.session())
                ),
                Err(ControllerError::NoSuchEntry(_)) => {
                    println!("No history entry #{}", index + 1);
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            ReplCommand::Clear => {
                self.controller.clear_history();
                println!("History cleared.");
            }
            ReplCommand::Status => {
                println!(
                    "{}",
                    ConsoleFormatter::format_status(
                        self.controller.session(),
                        self.controller.history().len()
                    )
                );
                if let Some(notice) = self.controller.persistence_notice() {
                    println!("{} {}", "!".yellow().bold(), notice.yellow());
                }
            }
            ReplCommand::Prompt(text) => self.generate(text).await,
            ReplCommand::Invalid(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn generate(&mut self, text: String) {
        self.controller.set_prompt(text);
        println!();

        match self.controller.generate().await {
            Ok(GenerateOutcome::Generated(_)) => {
                print!(
                    "{}",
                    ConsoleFormatter.format_session(self.controller.session())
                );
                println!("{}", "Rate this result with /rate <1-5>".dimmed());
            }
            Ok(GenerateOutcome::Skipped) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    fn rate(&mut self, score: u8) {
        match self.controller.rate(score) {
            Ok(RateOutcome::Attached { .. }) | Ok(RateOutcome::SessionOnly) => {
                println!(
                    "Rated {}",
                    ConsoleFormatter::stars(self.controller.session().current_rating)
                );
            }
            Ok(RateOutcome::NothingDisplayed) => println!("Nothing to rate yet."),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
