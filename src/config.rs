//! Run configuration.
//!
//! Settings come from three layers, highest priority first:
//!
//! 1. Command-line flags
//! 2. `[tool.pincheck]` in the manifest
//! 3. Built-in defaults

use std::path::PathBuf;

use crate::cli::Cli;
use crate::manifest::{ManifestLocator, ToolSettings};
use crate::resolver::IndexSource;

/// Command-line settings for a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Explicit manifest path; `None` searches the default candidates.
    pub manifest: Option<PathBuf>,

    /// Interpreter override.
    pub python: Option<String>,

    /// Directories to scan; empty means "not set on the command line".
    pub site_packages: Vec<PathBuf>,
}

impl From<&Cli> for CheckConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            manifest: cli.manifest.clone(),
            python: cli.python.clone(),
            site_packages: cli.site_packages.clone(),
        }
    }
}

impl CheckConfig {
    /// Where to look for the manifest.
    pub fn locator(&self) -> ManifestLocator {
        match &self.manifest {
            Some(path) => ManifestLocator::explicit(path),
            None => ManifestLocator::discover(),
        }
    }

    /// Where to look for installed packages, given the manifest's settings.
    ///
    /// Anything set on the command line beats the manifest; explicit
    /// directories beat an interpreter at the same layer.
    pub fn index_source(&self, tool: &ToolSettings) -> IndexSource {
        if !self.site_packages.is_empty() {
            return IndexSource::Directories(self.site_packages.clone());
        }
        if let Some(python) = &self.python {
            return IndexSource::Interpreter(python.clone());
        }
        if let Some(dirs) = &tool.site_packages {
            return IndexSource::Directories(dirs.clone());
        }
        if let Some(python) = &tool.python {
            return IndexSource::Interpreter(python.clone());
        }
        IndexSource::default()
    }
}
