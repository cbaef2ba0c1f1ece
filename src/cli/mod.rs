mod repl;
mod responder;

pub use responder::{CannedResponder, Responder};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::AppConfig;
use crate::core::store::ConversationStore;

#[derive(Parser, Debug)]
#[command(name = "parlor", version, about = "Conversation state manager with a terminal front-end")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "PARLOR_DEBUG")]
    debug: bool,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.clone().or_else(AppConfig::default_path) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    init_tracing(cli.debug || config.debug);

    let store = ConversationStore::new(&config);
    repl::run(store)
}

fn init_tracing(debug: bool) {
    let default = if debug { "parlor=debug" } else { "parlor=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
