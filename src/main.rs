mod cli;

use crate::cli::app::App;
use crate::cli::args::{Args, Command};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command();

    init_tracing(args.log_file.as_deref(), matches!(command, Command::Tui))?;

    let controller =
        moviedesk::connect(args.api_config()).context("invalid API configuration")?;

    match command {
        Command::Tui => {
            let mut app = App::new(controller);
            app.run().await.context("terminal UI failed")?;
        }
        Command::List { query, genre, sort } => {
            cli::commands::list(controller, &query, &genre, sort).await?
        }
        Command::Stats => cli::commands::stats(controller).await?,
        Command::Health => cli::commands::health(controller).await?,
    }

    Ok(())
}

/// Logs go to `log_file` when given. Otherwise one-shot commands log to
/// stderr and the TUI, which owns the terminal, does not log at all.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moviedesk=info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
