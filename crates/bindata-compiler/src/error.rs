//! Error types for the bindata compiler

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error on {path}: {source}")]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Input not available: {path}: {reason}")]
    InputUnavailable { path: PathBuf, reason: String },

    #[error("Name collision: {first} and {second} both resolve to '{key}'")]
    NameCollision {
        first: PathBuf,
        second: PathBuf,
        key: String,
    },

    #[error("Invalid asset path '{name}': {reason}")]
    InvalidAssetPath { name: String, reason: String },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CompileError {
    pub fn config(message: impl Into<String>) -> Self {
        CompileError::ConfigInvalid(message.into())
    }

    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::IoAt {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_path(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CompileError::InvalidAssetPath {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CompileError::InputUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
