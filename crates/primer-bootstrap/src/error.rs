//! Error types for primer-bootstrap

use std::path::PathBuf;
use thiserror::Error;

/// Failure to make sure a directory exists.
#[derive(Debug, Error)]
pub enum EnsureDirError {
    #[error("{} exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to create directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EnsureDirError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            EnsureDirError::NotADirectory { path } | EnsureDirError::Io { path, .. } => path,
        }
    }
}

/// Failure to load configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
}
