use crate::config::{DEFAULT_CONFIG_FILE, DEFAULT_NOIP_FILE};
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface of the attendance web server.
/// Running without flags starts the server with `config/rattendance.yaml`.
#[derive(Parser, Debug)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mark members late or absent for the day and chart the totals",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Override the listen address, e.g. 127.0.0.1:3000
    #[arg(long = "listen")]
    pub listen: Option<String>,
}

/// Command-line interface of the dynamic-DNS updater.
#[derive(Parser, Debug)]
#[command(
    name = "noip-update",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run the No-IP dynamic update client once and print its output",
    long_about = None
)]
pub struct NoipCli {
    /// Credentials file with address, username and password
    #[arg(long = "config", default_value = DEFAULT_NOIP_FILE)]
    pub config: PathBuf,
}
