//! CLI entrypoint for Omni
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use omni_application::{
    GenerateOutcome, HistoryStore, InteractionController, InteractionJournal, InteractionObserver,
    NoObserver, ResultGenerator,
};
use omni_domain::Category;
use omni_infrastructure::{
    ConfigLoader, FileConfig, InMemoryHistoryStore, JsonFileHistoryStore, JsonlInteractionJournal,
    TemplateGenerator,
};
use omni_presentation::{
    Cli, ConsoleFormatter, GenerationSpinner, JsonFormatter, OmniRepl, OutputFormat,
    OutputFormatter, ReplConfig, SimpleProgress,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting Omni");

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    if cli.ephemeral {
        run(cli, config, InMemoryHistoryStore::new()).await
    } else {
        let store = JsonFileHistoryStore::with_key(config.storage.resolve_dir(), &config.storage.key);
        info!("History slot: {}", store.path().display());
        run(cli, config, store).await
    }
}

/// Initialize logging based on verbosity level, with an optional file sink
fn init_logging(verbose: u8, file: Option<&str>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let Some(file) = file else {
        tracing_subscriber::registry().with(console).init();
        return None;
    };

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "omni.log".into());

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();
    Some(guard)
}

async fn run<S: HistoryStore + 'static>(cli: Cli, config: FileConfig, store: S) -> Result<()> {
    let settings = config.history.to_settings().unwrap_or_default();
    let generator = TemplateGenerator::new(config.generation.latency());

    let observer: Arc<dyn InteractionObserver> = if cli.quiet {
        Arc::new(NoObserver)
    } else if config.repl.show_progress {
        Arc::new(GenerationSpinner::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let mut controller =
        InteractionController::new(Arc::new(store), Arc::new(generator), settings, observer);

    if let Some(path) = config.logging.journal.as_deref()
        && let Some(journal) = JsonlInteractionJournal::open(path)
    {
        let journal: Arc<dyn InteractionJournal> = Arc::new(journal);
        controller = controller.with_journal(journal);
    }

    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    if cli.chat {
        let repl_config =
            ReplConfig::default().with_history_file(config.repl.history_file.map(PathBuf::from));
        let mut repl = OmniRepl::new(controller, repl_config);
        repl.run().await?;
        controller = repl.into_controller();
    } else if cli.history {
        println!("{}", formatter.format_history(controller.history()));
    } else if cli.clear_history {
        controller.clear_history();
        if !cli.quiet {
            println!("History cleared.");
        }
    } else {
        // Single prompt mode - prompt is required
        let Some(prompt) = cli.prompt else {
            bail!("Prompt is required. Use --chat for interactive mode.");
        };

        match generate_once(&mut controller, cli.category, prompt, formatter.as_ref()).await? {
            Some(output) => println!("{}", output),
            None => {
                if !cli.quiet {
                    eprintln!("Nothing to generate: the prompt is blank.");
                }
            }
        }
    }

    controller.shutdown().context("Failed to save history")?;

    Ok(())
}

/// Generate one result and render it. A blank prompt is skipped and yields
/// `None` rather than an error.
async fn generate_once<S: HistoryStore + 'static, G: ResultGenerator + 'static>(
    controller: &mut InteractionController<S, G>,
    category: Category,
    prompt: String,
    formatter: &dyn OutputFormatter,
) -> Result<Option<String>> {
    controller.select_category(category);
    controller.set_prompt(prompt);

    Ok(match controller.generate().await? {
        GenerateOutcome::Generated(_) => Some(formatter.format_session(controller.session())),
        GenerateOutcome::Skipped => None,
    })
}
