//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use scout_core::research::DEFAULT_RESEARCH_DELAY_MS;
use scout_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SCOUT_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SCOUT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Directory served under /static
    #[arg(long, env = "SCOUT_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Simulated model latency in milliseconds
    #[arg(long, env = "SCOUT_DELAY_MS", default_value_t = DEFAULT_RESEARCH_DELAY_MS)]
    pub delay_ms: u64,

    /// Development mode: debug logging and a badge on the page
    #[arg(long, env = "SCOUT_DEBUG")]
    pub debug: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "scout-serve.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
            research_delay: Duration::from_millis(self.delay_ms),
            debug: self.debug,
        }
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.to_config();

    println!();
    println!("  {} {}", "Scout".cyan().bold(), "Research Server".bold());
    if config.debug {
        println!("  {}", "development mode".yellow());
    }
    println!();
    println!("  {}  http://{}", "Dashboard".green(), config.addr());
    println!("  {}        http://{}/api/research", "API".green(), config.addr());
    println!(
        "  {}     {}",
        "Static".green(),
        config.static_dir.display()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    debug!(?config, "Resolved server configuration");
    scout_web::run_server(config).await?;

    Ok(())
}
