/// Errors raised by the surfaces around the matcher
///
/// Scoring and ranking themselves cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum PathMatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PathMatchError>;
