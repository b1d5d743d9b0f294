//! pincheck - Verify installed Python package versions against exact pins.
//!
//! pincheck reads the `[project].dependencies` list of a `pyproject.toml`,
//! keeps the exact `name==version` pins, looks up the installed version of
//! each package in the environment's distribution metadata, and reports
//! matches, mismatches and missing packages.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check command
//! - [`config`] - Layering of command-line and manifest settings
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest discovery and dependency parsing
//! - [`report`] - Classification and report rendering
//! - [`resolver`] - Installed version lookup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pincheck::manifest::ExactPin;
//! use pincheck::report::{CheckReport, PackageStatus};
//! use pincheck::resolver::VersionResolver;
//!
//! let mut installed = HashMap::new();
//! installed.insert("numpy".to_string(), "1.26.4".to_string());
//!
//! let pins = vec![ExactPin::new("numpy", "1.26.4"), ExactPin::new("rich", "13.7.1")];
//! let report = CheckReport::check(&pins, &mut VersionResolver::new(installed));
//!
//! assert_eq!(report.checks[1].status, PackageStatus::Missing);
//! assert!(!report.passed());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod resolver;
pub mod ui;

pub use error::{PincheckError, Result};
