use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

pub const DEFAULT_TOKEN: &str = "default_token";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub api_token: String,
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let service_port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let api_token = lookup("TOKEN").unwrap_or_else(|| DEFAULT_TOKEN.to_string());

        let data_file = lookup("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data.json"));

        Ok(Config {
            service_port,
            service_host,
            api_token,
            data_file,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        if self.api_token == DEFAULT_TOKEN {
            tracing::warn!("  TOKEN not set, /entries is protected by the default token");
        }
    }
}
