use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for promptbar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptbarError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PromptbarError {
    fn from(err: std::io::Error) -> Self {
        PromptbarError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
