//! Error handling module for Cortes

use thiserror::Error;

/// Main error type for Cortes operations
#[derive(Error, Debug)]
pub enum CortesError {
    /// Configuration file could not be parsed or holds bad values
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file missing or unreadable
    #[error("Failed to read config file {path}: {message}")]
    ConfigFile { path: String, message: String },

    /// Selected video file could not be read
    #[error("Failed to read video file {path}: {message}")]
    VideoFile { path: String, message: String },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {message}")]
    HttpClient { message: String },

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Cortes operations
pub type CortesResult<T> = std::result::Result<T, CortesError>;
