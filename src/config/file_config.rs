use crate::config::AppConfig;
use crate::utils::error::{CatsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML file:
///
/// ```toml
/// [source]
/// base_url = "http://localhost:8080/"
/// resource_path = "people.json"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub resource_path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            CatsError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.source.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(resource_path) = &self.source.resource_path {
            config.resource_path = resource_path.clone();
        }
        if let Some(timeout) = self.source.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
    }
}
