use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use tooldex::catalog::{CATALOG, tool_names};
use tooldex::config::Config;
use tooldex::domain::{DirectoryState, FetchOutcome};
use tooldex::llm::{DescriptionProvider, GeminiClient, GeminiConfig};
use tooldex::{export, pipeline, tui};

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooldex")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tooldex.log");

    // The TUI owns the terminal, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Build the provider; a missing credential stops the program here
fn build_provider(config: &Config) -> Result<Arc<dyn DescriptionProvider>> {
    let client = GeminiClient::from_env(&config.provider.api_key_env, GeminiConfig::from(&config.provider))
        .context("Cannot start without a provider credential")?;
    info!("Using provider {:?}", client);
    Ok(Arc::new(client))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Tui) => run_tui(config),
        Some(Commands::Export { output }) => {
            let dir = output.as_deref().unwrap_or(config.export.directory.as_path());
            handle_export_command(dir, config)
        }
        Some(Commands::List) => handle_list_command(),
    }
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let provider = build_provider(config)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let app = tui::App::new(DirectoryState::from_catalog(CATALOG));
        let (_pipeline, updates) = pipeline::spawn(provider, tool_names(CATALOG));

        tui::install_panic_hook();
        let terminal = tui::init_terminal()?;
        let mut runner = tui::TuiRunner::new(
            terminal,
            app,
            tui::EventHandler::from_config(&config.tui),
            updates,
            config.export.directory.clone(),
        );
        let result = runner.run().await;
        tui::restore_terminal()?;
        result
    })
}

fn handle_export_command(dir: &Path, config: &Config) -> Result<()> {
    info!("Headless export to {}", dir.display());
    let provider = build_provider(config)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let mut state = DirectoryState::from_catalog(CATALOG);
    let total = state.len();

    let report = runtime.block_on(pipeline::populate(provider, &mut state, |update, state| {
        let counter = format!("[{:>2}/{}]", state.settled_count(), total);
        match &update.outcome {
            FetchOutcome::Described(_) => println!("{} {} {}", counter.dimmed(), "✓".green(), update.name),
            FetchOutcome::Failed(reason) => {
                println!("{} {} {} ({})", counter.dimmed(), "✗".red(), update.name, reason.dimmed())
            }
        }
    }))?;

    let path = export::export_to_dir(&state, dir).context("Failed to write CSV")?;
    println!(
        "{} {} [{}] ({} described, {} failed, {} tokens)",
        "Saved:".green(),
        path.display(),
        export::CSV_MIME_TYPE.dimmed(),
        report.succeeded,
        report.failed,
        report.usage.total()
    );
    Ok(())
}

fn handle_list_command() -> Result<()> {
    for (i, item) in CATALOG.iter().enumerate() {
        println!("{:>2}. {:<18} {}", i + 1, item.name.bold(), item.link.cyan());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    // Logging isn't up yet, so skipped config files are reported on stderr
    let config = Config::load(cli.config.as_ref(), |path, e| {
        eprintln!(
            "{} ignoring {}: {:#}",
            "warning:".yellow().bold(),
            path.display(),
            e
        );
    })
    .context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
