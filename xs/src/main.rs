use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use xrefstore::XrefStore;
use xrefstore::cli::{Cli, Command};
use xrefstore::config::Config;
use xrefstore::repl::ReplSession;

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", level);
            tracing::Level::INFO
        }
    }
}

fn setup_logging(log_dir: &Path, level: Option<&str>) -> Result<()> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    let level = level.map(parse_level).unwrap_or(tracing::Level::INFO);
    let log_file = fs::File::create(log_dir.join("xs.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!(?level, "Logging initialized");
    Ok(())
}

fn report(err: &xrefstore::XrefError) {
    eprintln!("{} {}", "Error:".red(), err);
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(&config.log_dir, cli.log_level.as_deref().or(config.log_level.as_deref()))
        .context("Failed to setup logging")?;

    info!("xs starting");

    match cli.command.unwrap_or(Command::Repl { files: Vec::new() }) {
        Command::Repl { files } => {
            let mut session = ReplSession::new(config);
            for file in &files {
                if let Err(e) = session.store_mut().import(file) {
                    report(&e);
                }
            }
            session.run()?;
        }
        Command::Check { file } => {
            let mut store = XrefStore::new();
            if let Err(e) = store.import(&file) {
                report(&e);
                return Ok(ExitCode::FAILURE);
            }
            println!("File is valid");
        }
        Command::Export { file, output } => {
            let mut store = XrefStore::new();
            let exported = store.import(&file).and_then(|name| store.export(&name, &output));
            if let Err(e) = exported {
                report(&e);
                return Ok(ExitCode::FAILURE);
            }
            println!("{} Exported index to {}", "✓".green(), output.display().to_string().cyan());
        }
    }

    Ok(ExitCode::SUCCESS)
}
