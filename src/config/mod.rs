#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://agl-developer-test.azurewebsites.net/";
pub const DEFAULT_RESOURCE_PATH: &str = "people.json";

/// Resolved settings for one run. The defaults are the fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub resource_path: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("resource_path", &self.resource_path)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
