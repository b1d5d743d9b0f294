//! `pyproject.toml` loading.

use crate::error::{PincheckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::specifier::{parse_specifier, ExactPin, ParsedSpecifier, SkippedSpecifier};

/// The parts of `pyproject.toml` pincheck reads.
#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<ProjectTable>,
    #[serde(default)]
    tool: ToolTable,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    dependencies: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    pincheck: ToolSettings,
}

/// Settings from the optional `[tool.pincheck]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ToolSettings {
    /// Interpreter used to discover the import path.
    pub python: Option<String>,

    /// Directories to scan instead of asking the interpreter.
    pub site_packages: Option<Vec<PathBuf>>,
}

/// A parsed manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Where the manifest was read from.
    pub path: PathBuf,

    /// Exact pins, one per package name, in first-declaration order.
    pub pins: Vec<ExactPin>,

    /// Dependency strings that were not exact pins.
    pub skipped: Vec<SkippedSpecifier>,

    /// `[tool.pincheck]` settings.
    pub settings: ToolSettings,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest content; `path` is used for error messages and for
    /// resolving relative `site-packages` entries.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let parse_error = |message: String| PincheckError::ManifestParse {
            path: path.to_path_buf(),
            message,
        };

        let document: PyProject = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let project = document
            .project
            .ok_or_else(|| parse_error("missing [project] table".to_string()))?;
        let dependencies = project
            .dependencies
            .ok_or_else(|| parse_error("missing [project].dependencies".to_string()))?;

        let mut pins: Vec<ExactPin> = Vec::new();
        let mut skipped = Vec::new();

        for entry in &dependencies {
            match parse_specifier(entry) {
                ParsedSpecifier::Exact(pin) => {
                    // A repeated name keeps its position and takes the later version.
                    if let Some(existing) = pins.iter_mut().find(|p| p.name == pin.name) {
                        tracing::debug!(
                            "{} declared more than once; using {}",
                            pin.name,
                            pin.version
                        );
                        existing.version = pin.version;
                    } else {
                        pins.push(pin);
                    }
                }
                ParsedSpecifier::Skipped(spec) => {
                    tracing::debug!("{}", spec.warning());
                    skipped.push(spec);
                }
                ParsedSpecifier::Blank => {}
            }
        }

        let mut settings = document.tool.pincheck;
        if let Some(dirs) = settings.site_packages.as_mut() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            for dir in dirs.iter_mut() {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            pins,
            skipped,
            settings,
        })
    }
}
