//! Configuration loading and management

use crate::core::{BlogError, BlogResult, ConfigError, NewBlog};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "BLOGLIST_PORT";
/// Environment variable overriding the listen host
pub const HOST_ENV: &str = "BLOGLIST_HOST";

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3003,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "bloglist=info,tower_http=info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,

    /// Blogs loaded into the store at startup
    pub seed: Vec<NewBlog>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> BlogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> BlogResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply `BLOGLIST_HOST` / `BLOGLIST_PORT` from the process environment
    pub fn with_env_overrides(self) -> BlogResult<Self> {
        self.with_overrides(std::env::var(HOST_ENV).ok(), std::env::var(PORT_ENV).ok())
    }

    fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> BlogResult<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port.parse().map_err(|e: std::num::ParseIntError| {
                BlogError::from(ConfigError::InvalidValue {
                    field: PORT_ENV.to_string(),
                    value: port.clone(),
                    message: e.to_string(),
                })
            })?;
        }
        Ok(self)
    }

    /// The `host:port` address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
