//! Jobwork CLI - Supplier directory for job-work vouchers.

use clap::Parser;
use jobwork_cli::commands;
use jobwork_cli::repl;
use jobwork_cli::{Cli, Command, Config, Formatter};
use jobwork_store::{SqliteKvStore, SupplierDirectory};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> jobwork_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_or_init(&config_path)?;

    init_tracing(cli.verbose, &config.settings.log_level);

    if let Some(store) = cli.store {
        config.store_path = PathBuf::from(store);
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // A store that cannot be opened degrades the directory, it does not abort
    let mut directory = match SqliteKvStore::new(&config.store_path) {
        Ok(store) => SupplierDirectory::new(store),
        Err(e) => {
            tracing::warn!(
                "Supplier store {} unavailable: {}",
                config.store_path.display(),
                e
            );
            SupplierDirectory::unavailable()
        }
    };

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(directory, &config, &formatter)?;
        }
        Some(Command::Record(args)) => {
            commands::execute_record(args, &mut directory, &formatter)?;
        }
        Some(Command::List) => {
            commands::execute_list(&directory, &formatter)?;
        }
        Some(Command::Suggest(args)) => {
            commands::execute_suggest(args, &directory, &formatter)?;
        }
        Some(Command::Clear(args)) => {
            commands::execute_clear(args, &mut directory, &formatter)?;
        }
        Some(Command::Format(args)) => {
            commands::execute_format(args, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `JOBWORK_LOG` wins over `--verbose`, which wins over config.
fn init_tracing(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_from_env("JOBWORK_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
