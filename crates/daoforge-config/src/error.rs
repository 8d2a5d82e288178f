use thiserror::Error;

/// Errors raised while locating, reading or interpreting the app
/// configuration file.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
