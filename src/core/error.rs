use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Content parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to load view: {0}")]
    ViewLoadError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
