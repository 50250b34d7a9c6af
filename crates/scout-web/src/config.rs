//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

use scout_core::research::DEFAULT_RESEARCH_DELAY;
use scout_core::{ScoutError, ScoutResult};

/// Settings for the research server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Simulated latency before each answer.
    pub research_delay: Duration,
    /// Development mode.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
            research_delay: DEFAULT_RESEARCH_DELAY,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the server cannot start with.
    ///
    /// A static directory that does not exist is allowed; every `/static`
    /// request then answers 404.
    pub fn validate(&self) -> ScoutResult<()> {
        if self.host.trim().is_empty() {
            return Err(ScoutError::config("host must not be empty"));
        }
        if self.static_dir.exists() && !self.static_dir.is_dir() {
            return Err(ScoutError::config(format!(
                "static path '{}' is not a directory",
                self.static_dir.display()
            )));
        }
        if !self.static_dir.exists() {
            tracing::warn!(
                path = %self.static_dir.display(),
                "Static directory not found, /static requests will answer 404"
            );
        }
        Ok(())
    }
}
