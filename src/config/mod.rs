use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the web application configuration.
pub const DEFAULT_CONFIG_FILE: &str = "config/rattendance.yaml";

/// Default location of the dynamic-DNS credentials.
pub const DEFAULT_NOIP_FILE: &str = "config/noip-duc.json";

/// Web application configuration, read once at process start.
///
/// The file is YAML; plain JSON files are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default)]
    pub chart_font: Option<PathBuf>,
}

fn default_database() -> String {
    "data/rattendance.sqlite".to_string()
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            listen: default_listen(),
            chart_font: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing or malformed file is an error.
    pub fn load(path: &Path) -> AppResult<Self> {
        load_file(path)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }
}

/// Credentials for the dynamic-DNS update client.
#[derive(Clone, Deserialize)]
pub struct NoipConfig {
    pub address: String,
    pub username: String,
    pub password: String,
    /// Client executable.
    #[serde(default = "default_client")]
    pub client: String,
    /// Run the client through `sudo`.
    #[serde(default = "default_sudo")]
    pub sudo: bool,
}

fn default_client() -> String {
    "noip-duc".to_string()
}

fn default_sudo() -> bool {
    true
}

impl NoipConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        load_file(path)
    }
}

impl fmt::Debug for NoipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoipConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"***")
            .field("client", &self.client)
            .field("sudo", &self.sudo)
            .finish()
    }
}

fn load_file<T: for<'de> Deserialize<'de>>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
}
