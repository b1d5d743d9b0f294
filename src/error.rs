//! Error types for pincheck operations.
//!
//! This module defines [`PincheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PincheckError` for conditions that abort a run
//! - Per-package discrepancies are not errors; they are collected in the report
//! - Use `anyhow::Error` (via `PincheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pincheck operations.
#[derive(Debug, Error)]
pub enum PincheckError {
    /// No manifest exists at any of the searched locations.
    #[error("Could not find pyproject.toml in any expected location (searched: {})", format_paths(.searched))]
    ManifestNotFound { searched: Vec<PathBuf> },

    /// The manifest exists but could not be read as a project manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The Python interpreter could not report its import path.
    #[error("Failed to query interpreter '{interpreter}': {message}")]
    Interpreter {
        interpreter: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for pincheck operations.
pub type Result<T> = std::result::Result<T, PincheckError>;
