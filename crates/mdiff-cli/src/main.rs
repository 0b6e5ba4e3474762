mod cli;
mod commands;
mod interactive;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandOptions;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    init_logging(cli.verbose, !cli.no_color);

    let options = CommandOptions::new(
        cli.yes_all,
        !cli.no_color,
        cli.snapshots_dir.as_deref(),
        cli.config.as_deref(),
        cli.no_config,
    );

    match &cli.command {
        Commands::Snapshot { name, project } => {
            commands::Snapshot::execute(name, project.as_deref(), &options)
                .context("Failed to execute snapshot command")?;
        }
        Commands::Compare {
            names,
            number,
            shallow,
        } => {
            commands::Compare::execute(names, *number, *shallow, &options)
                .context("Failed to execute compare command")?;
        }
        Commands::List => {
            commands::List::execute(&options).context("Failed to execute list command")?;
        }
        Commands::Remove { names, all } => {
            commands::Remove::execute(names, *all, &options)
                .context("Failed to execute rm command")?;
        }
        Commands::Config => {
            commands::Config::execute(&options).context("Failed to execute config command")?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug output for this tool
fn init_logging(verbose: bool, ansi: bool) {
    let default_filter = if verbose { "mdiff=debug" } else { "mdiff=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
