use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("API URL is missing in config")]
    MissingApiUrl,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_url: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout for the upstream client, applied once at startup
    /// when the client is built.
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

fn default_port() -> u16 {
    6053
}

fn default_timeout_s() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Config {
        Config {
            api_url: String::new(),
            port: default_port(),
            timeout_s: default_timeout_s(),
        }
    }
}

impl Config {
    /// Reads and parses the config file. Called fresh on every request so a
    /// corrected config file takes effect without a restart.
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        if config.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        Ok(config)
    }
}

pub fn get_config_path() -> String {
    std::env::var("CONFIG_PATH")
        .ok()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}
