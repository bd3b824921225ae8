#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Preferences error: {0}")]
    Prefs(String),
}

pub type AppResult<T> = Result<T, AppError>;
