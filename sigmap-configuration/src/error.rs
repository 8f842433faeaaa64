use thiserror::Error;

/// Errors raised while turning a configuration into a pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HTTP status code: {0}")]
    InvalidStatusCode(u16),

    #[error("invalid status range [{low}, {high}]")]
    InvalidRange { low: u16, high: u16 },

    #[error("invalid key path: {0:?}")]
    InvalidKeyPath(String),
}
