use clap::{Parser, Subcommand};
use moviedesk::api::DEFAULT_API_BASE;
use moviedesk::view::ALL_GENRES;
use moviedesk::{ApiConfig, SortKey};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "moviedesk", version, about = "Terminal client for the movies CRUD API")]
pub struct Args {
    /// Backend address
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Print the filtered, sorted list once
    List {
        /// Substring of title, genre or year
        #[arg(long, default_value = "")]
        query: String,
        /// Exact genre, or "All"
        #[arg(long, default_value = ALL_GENRES)]
        genre: String,
        /// newest, title or rating
        #[arg(long, default_value_t = SortKey::Newest)]
        sort: SortKey,
    },
    /// Print movie count and average rating
    Stats,
    /// Query the backend health endpoint
    Health,
}

impl Args {
    pub fn api_config(&self) -> ApiConfig {
        let mut config = ApiConfig::new(&self.api_base);
        if let Some(secs) = self.timeout_secs {
            config = config.timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
