//! Progress reporting for generation

use crate::catalog::category_info;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use omni_application::{InteractionObserver, StoreError};
use omni_domain::Category;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a generation is in flight
pub struct GenerationSpinner {
    spinner: Mutex<Option<ProgressBar>>,
}

impl GenerationSpinner {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for GenerationSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionObserver for GenerationSpinner {
    fn on_generation_start(&self, category: &Category) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "Generating with {}...",
            category_info(*category).display_name
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_generation_complete(&self, _category: &Category) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_persist_failed(&self, error: &StoreError) {
        warn_store(error);
    }

    fn on_history_recovered(&self, error: &StoreError) {
        warn_store(error);
        eprintln!("{}", "Starting with an empty history.".yellow());
    }
}

fn warn_store(error: &StoreError) {
    eprintln!("{} {}", "!".yellow().bold(), error.to_string().yellow());
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl InteractionObserver for SimpleProgress {
    fn on_generation_start(&self, category: &Category) {
        println!(
            "{} Generating with {}...",
            "->".cyan(),
            category_info(*category).display_name.bold()
        );
    }

    fn on_persist_failed(&self, error: &StoreError) {
        warn_store(error);
    }

    fn on_history_recovered(&self, error: &StoreError) {
        warn_store(error);
        eprintln!("{}", "Starting with an empty history.".yellow());
    }
}
