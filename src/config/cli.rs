use crate::config::file_config::FileConfig;
use crate::config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cats-and-owners")]
#[command(about = "Lists cat names grouped by their owner's gender")]
pub struct CliConfig {
    #[arg(long, help = format!("Base address of the people service [default: {}]", DEFAULT_BASE_URL))]
    pub base_url: Option<String>,

    #[arg(long, help = format!("Path of the owners document, relative to the base address [default: {}]", DEFAULT_RESOURCE_PATH))]
    pub resource_path: Option<String>,

    #[arg(long, help = "Request timeout in seconds (waits indefinitely when unset)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with a [source] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then explicit flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path.display());
            FileConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(resource_path) = &self.resource_path {
            config.resource_path = resource_path.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}
