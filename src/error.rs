use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl MetricsError {
    /// Process exit code reported when this error aborts a command.
    pub fn exit_code(&self) -> i32 {
        match self {
            MetricsError::NotFound(_) => 2,
            MetricsError::AuthError(_) => 3,
            MetricsError::RateLimited(_) => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
