//! Error types for the Terrisone explorer

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the map adapter and widget implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Map container not found: {0}")]
    ContainerMissing(String),

    #[error("No map is mounted for {0}")]
    NotMounted(&'static str),

    #[error("Map widget error: {0}")]
    Widget(String),
}

/// Errors loading explorer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Error parsing a category key from its wire form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category key: {0}")]
pub struct CategoryParseError(pub String);

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;
