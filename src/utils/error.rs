use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatsError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode owners payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Decode,
    Config,
    Output,
}

impl CatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatsError::Transport(_) => ErrorCategory::Transport,
            CatsError::Decode(_) => ErrorCategory::Decode,
            CatsError::InvalidUrl(_)
            | CatsError::ConfigValidationError { .. }
            | CatsError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            CatsError::Io(_) => ErrorCategory::Output,
        }
    }

    /// 程序結束碼：配置錯誤為 2，其餘執行錯誤為 1
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatsError>;
