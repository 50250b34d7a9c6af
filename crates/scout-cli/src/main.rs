//! Scout CLI
//!
//! Serves a research assistant page and a simulated multi-model research API.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(log_file: Option<&std::path::Path>, debug: bool) -> Result<()> {
    let default_filter = if debug {
        "scout=debug,scout_core=debug,scout_web=debug,tower_http=debug"
    } else {
        "scout=info,scout_core=info,scout_web=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        // stdout and file
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (log_file, debug) = match &cli.command {
        Commands::Serve(args) => (args.log.then(|| args.log_file.clone()), args.debug),
    };
    init_tracing(log_file.as_deref(), debug || cli.verbose)?;

    cli.execute().await
}
