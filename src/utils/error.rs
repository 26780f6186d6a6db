use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ServiceError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ServiceError::IoError(e) => format!("Could not read file: {}", e),
            ServiceError::HttpError(e) => format!("Network request failed: {}", e),
            ServiceError::UnexpectedStatus { url, status } => {
                format!("Server at {} answered with status {}", url, status)
            }
            ServiceError::ConfigParseError { message } => {
                format!("Configuration file is not valid TOML: {}", message)
            }
            ServiceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
