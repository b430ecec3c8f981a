// src/core/config_manager.rs
//! Endpoint configuration: optional config.yaml, overridden by environment variables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_URL: &str = "http://127.0.0.1:5555";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONFIG_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EndpointConfig,
    production: EndpointConfig,
}

impl ConfigManager {
    /// Load from ./config.yaml (if present) and the environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        let from_file = if config_path.exists() {
            Some(Self::load_from_file(&config_path, &environment)?)
        } else {
            None
        };

        let endpoint = Self::resolve(
            from_file,
            std::env::var("AUTOAPPLY_CONFIG_URL").ok(),
            std::env::var("AUTOAPPLY_TIMEOUT_SECS").ok(),
        )?;

        info!("Config endpoint: {}", endpoint.base_url);
        Ok(Self {
            environment,
            endpoint,
        })
    }

    fn get_environment() -> String {
        std::env::var("AUTOAPPLY_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<EndpointConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Environment values win over the file, the file wins over defaults.
    fn resolve(
        from_file: Option<EndpointConfig>,
        url_var: Option<String>,
        timeout_var: Option<String>,
    ) -> Result<EndpointConfig> {
        let mut endpoint = from_file.unwrap_or_default();

        if let Some(url) = url_var.filter(|url| !url.trim().is_empty()) {
            endpoint.base_url = url;
        }

        if let Some(timeout) = timeout_var {
            endpoint.timeout_seconds = timeout
                .trim()
                .parse()
                .with_context(|| format!("AUTOAPPLY_TIMEOUT_SECS must be a number, got '{}'", timeout))?;
        }

        endpoint.base_url = endpoint.base_url.trim_end_matches('/').to_string();
        Ok(endpoint)
    }
}
