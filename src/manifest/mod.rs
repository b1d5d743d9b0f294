//! Manifest discovery and parsing.
//!
//! # Modules
//!
//! - [`locate`] - Candidate paths and manifest discovery
//! - [`pyproject`] - `pyproject.toml` parsing and `[tool.pincheck]` settings
//! - [`specifier`] - Classification of individual dependency strings

pub mod locate;
pub mod pyproject;
pub mod specifier;

pub use locate::{ManifestLocator, MANIFEST_FILE};
pub use pyproject::{Manifest, ToolSettings};
pub use specifier::{parse_specifier, ExactPin, ParsedSpecifier, SkipReason, SkippedSpecifier};
