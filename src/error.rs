// src/error.rs
//! Error types for a scrape run.
//!
//! Every failure is terminal for the invocation; the CLI maps each kind to
//! its own exit code.

use std::{io, path::PathBuf};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Player not found: {player_id}")]
    NotFound { player_id: String },

    #[error("Retrieval failed for {url}: {reason}")]
    Retrieval { url: String, reason: String },

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    pub fn retrieval(url: &str, reason: impl ToString) -> Self {
        Self::Retrieval { url: url.to_string(), reason: reason.to_string() }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        Self::Write { path: path.into(), source: source.into() }
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::Retrieval { .. } => 4,
            Self::Write { .. } => 5,
        }
    }
}
