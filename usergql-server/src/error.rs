//! Error types for usergql-server

use thiserror::Error;

/// Result alias for server startup and configuration.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Failure of a single store operation.
///
/// Connectivity loss, constraint violations and malformed statements all
/// land here untranslated. Resolvers surface it as a field error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Invalid connection or server configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Errors raised while starting or running the HTTP server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ConfigError {
    pub fn invalid_value(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}
