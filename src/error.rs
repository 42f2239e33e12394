use std::io;
use std::path::PathBuf;
use thiserror::Error;

// Import module-level errors for AppError
use crate::allowlist::validator::ValidationError;
use crate::config::settings::ConfigError;

/// Errors that can occur while reading repository state
#[derive(Debug, Error)]
pub enum GitError {
    #[error("{} is not available", .0.display())]
    LocationUnavailable(PathBuf),

    #[error("{} is not a valid Git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("Git command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("Git version {0} is too old. Minimum required: 2.11")]
    VersionTooOld(String),

    #[error("Failed to detect git version: {0}")]
    VersionDetectionFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Top-level application error that wraps all module-specific errors
///
/// Module errors convert automatically via `From`, so the binary can use
/// `?` throughout and decide the exit code in one place.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
