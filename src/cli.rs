//! Command-line interface for the standing data server.
//!
//! Arguments override the corresponding config-file settings.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::Result;

/// CLI arguments for the standing data server
#[derive(Debug, Clone, Parser)]
#[command(
    name = "standing-data-api",
    version,
    about = "Serve read-only lookups over flat-file aviation standing data",
    long_about = "An HTTP service exposing the aviation standing data distribution \
                  (aircraft, airlines, airports, routes, countries, model types, \
                  Mode-S code blocks, registration prefixes) as filterable, \
                  read-only JSON endpoints."
)]
pub struct Args {
    /// Path to a TOML configuration file
    ///
    /// Settings not present in the file fall back to their defaults;
    /// command-line options override the file.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root of the standing data directory tree
    ///
    /// Should contain directories like airlines/schema-01/, airports/schema-01/,
    /// aircraft/schema-01/, etc.
    #[arg(short = 'd', long = "data-root", value_name = "PATH")]
    pub data_root: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long = "host", value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Number of HTTP worker threads (defaults to the CPU count)
    #[arg(long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve the effective configuration: file (or defaults), then
    /// command-line overrides.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(data_root) = &self.data_root {
            config.data.root = data_root.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }

        Ok(config)
    }

    /// Effective log level: verbosity flags win over the configured level.
    pub fn log_level<'a>(&self, config: &'a ServerConfig) -> &'a str {
        match self.verbose {
            0 => &config.logging.level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the resolved level when set.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("standing_data_api={level},actix_web=info")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
