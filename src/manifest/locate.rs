//! Manifest discovery.
//!
//! The manifest is looked up at a short, fixed list of candidate paths and
//! the first one that exists is used.

use crate::error::{PincheckError, Result};
use std::path::{Path, PathBuf};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Location used while building container images.
const BUILD_MANIFEST: &str = "/tmp/pyproject.toml";

/// Ordered candidate paths for the manifest.
#[derive(Debug, Clone)]
pub struct ManifestLocator {
    candidates: Vec<PathBuf>,
}

impl ManifestLocator {
    /// The default candidates, in priority order:
    ///
    /// 1. `/tmp/pyproject.toml`
    /// 2. `pyproject.toml` next to the running executable
    /// 3. `pyproject.toml` in the current directory
    pub fn discover() -> Self {
        let mut candidates = vec![PathBuf::from(BUILD_MANIFEST)];
        match std::env::current_exe() {
            Ok(exe) => {
                if let Some(dir) = exe.parent() {
                    candidates.push(dir.join(MANIFEST_FILE));
                }
            }
            Err(e) => tracing::debug!("Could not resolve executable path: {}", e),
        }
        candidates.push(PathBuf::from(MANIFEST_FILE));
        Self { candidates }
    }

    /// Use exactly one path instead of the default search.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Use a custom candidate list.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first candidate that exists.
    pub fn locate(&self) -> Result<PathBuf> {
        for path in &self.candidates {
            if is_manifest(path) {
                tracing::debug!("Using manifest at {}", path.display());
                return Ok(path.clone());
            }
            tracing::trace!("No manifest at {}", path.display());
        }

        Err(PincheckError::ManifestNotFound {
            searched: self.candidates.clone(),
        })
    }
}

fn is_manifest(path: &Path) -> bool {
    path.is_file()
}
