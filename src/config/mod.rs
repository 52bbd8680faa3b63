mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub assets_dir: Option<PathBuf>,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub editorial_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub editorial_path: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let assets_dir = file
            .assets_dir
            .map(PathBuf::from)
            .or_else(|| cli.assets_dir.clone())
            .unwrap_or_else(|| PathBuf::from("assets"));

        if !assets_dir.exists() {
            bail!("Assets directory does not exist: {:?}", assets_dir);
        }
        if !assets_dir.is_dir() {
            bail!("assets_dir is not a directory: {:?}", assets_dir);
        }

        let port = file.port.unwrap_or(cli.port);
        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let editorial_path = file
            .editorial_path
            .map(PathBuf::from)
            .or_else(|| cli.editorial_path.clone());

        Ok(Self {
            assets_dir,
            port,
            bind_address,
            logging_level,
            content_cache_age_sec,
            editorial_path,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            bind_address: self.bind_address.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
