use std::path::{Path, PathBuf};
use std::time::Duration;

use everland_valet::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;

use crate::error::ToolError;

const BASE_URL_ENV: &str = "VALET_BASE_URL";

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Settings the client is built from.
#[derive(Debug, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("valet").join("config.toml"))
}

fn parse_config(path: &Path, content: &str) -> Result<Config, ToolError> {
    let config: Config = toml::from_str(content).map_err(|source| ToolError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    if config.timeout_secs == Some(0) {
        return Err(ToolError::InvalidConfig {
            path: path.to_path_buf(),
            reason: "timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(config)
}

/// Loads the config file; a missing file yields defaults.
pub fn load_config() -> Result<Config, ToolError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(Config::default());
    };

    parse_config(&path, &content)
}

fn resolve(config: Config, env_base_url: Option<String>) -> ClientSettings {
    let base_url = env_base_url
        .filter(|url| !url.is_empty())
        .or(config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = config
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    ClientSettings { base_url, timeout }
}

pub fn resolve_client_settings() -> Result<ClientSettings, ToolError> {
    let config = load_config()?;
    Ok(resolve(config, std::env::var(BASE_URL_ENV).ok()))
}
