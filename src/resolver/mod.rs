//! Installed version resolution.
//!
//! A declared package name is first mapped to its lookup name, then queried
//! against a [`PackageIndex`]. Absence is `None`; failures to build the
//! index at all are reported as errors by the index constructors, so the two
//! never get confused.
//!
//! # Modules
//!
//! - [`interpreter`] - `sys.path` discovery through a Python interpreter
//! - [`metadata`] - `METADATA` / `PKG-INFO` header parsing
//! - [`site_packages`] - Directory scanning index

pub mod interpreter;
pub mod metadata;
pub mod site_packages;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;

pub use interpreter::{query_sys_path, DEFAULT_PYTHON};
pub use metadata::{parse_metadata, DistributionMetadata};
pub use site_packages::{InstalledDistribution, SitePackagesIndex};

/// Source of installed-package metadata.
pub trait PackageIndex {
    /// Installed version of `name`, or `None` if it is not installed.
    fn installed_version(&self, name: &str) -> Option<String>;
}

impl PackageIndex for HashMap<String, String> {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Map a declared package name to the name used for the metadata lookup.
///
/// Only `scikit-learn` is renamed; every other name is returned unchanged.
pub fn lookup_name(declared: &str) -> &str {
    match declared {
        "scikit-learn" => "scikit_learn",
        other => other,
    }
}

/// Normalize a distribution name for comparison.
///
/// Runs of `-`, `_` and `.` become a single `_` and the result is lowercased.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('_');
            }
            in_separator = true;
        } else {
            normalized.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    normalized
}

/// Where to find installed distributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    /// Ask this interpreter for its `sys.path`.
    Interpreter(String),
    /// Scan exactly these directories.
    Directories(Vec<PathBuf>),
}

impl Default for IndexSource {
    fn default() -> Self {
        Self::Interpreter(DEFAULT_PYTHON.to_string())
    }
}

impl IndexSource {
    /// Build the index for this source.
    pub fn build(&self) -> Result<SitePackagesIndex> {
        let search_path = match self {
            Self::Interpreter(python) => query_sys_path(python)?,
            Self::Directories(dirs) => dirs.clone(),
        };
        Ok(SitePackagesIndex::scan(&search_path))
    }
}

/// Resolves declared package names to installed versions.
///
/// Results are cached so each name is queried at most once per run.
pub struct VersionResolver<I: PackageIndex> {
    index: I,
    cache: HashMap<String, Option<String>>,
}

impl<I: PackageIndex> VersionResolver<I> {
    pub fn new(index: I) -> Self {
        Self {
            index,
            cache: HashMap::new(),
        }
    }

    /// Installed version of the declared package, or `None` if missing.
    pub fn installed_version(&mut self, declared: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(declared) {
            return cached.clone();
        }

        let name = lookup_name(declared);
        let version = self.index.installed_version(name);
        match &version {
            Some(v) => tracing::debug!("{} (as {}) is installed at {}", declared, name, v),
            None => tracing::debug!("{} (as {}) is not installed", declared, name),
        }

        self.cache.insert(declared.to_string(), version.clone());
        version
    }

    pub fn index(&self) -> &I {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Index that records every name it is asked for.
    struct RecordingIndex {
        installed: HashMap<String, String>,
        queries: RefCell<Vec<String>>,
    }

    impl RecordingIndex {
        fn new(installed: &[(&str, &str)]) -> Self {
            Self {
                installed: installed
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl PackageIndex for RecordingIndex {
        fn installed_version(&self, name: &str) -> Option<String> {
            self.queries.borrow_mut().push(name.to_string());
            self.installed.get(name).cloned()
        }
    }

    #[test]
    fn lookup_name_renames_scikit_learn() {
        assert_eq!(lookup_name("scikit-learn"), "scikit_learn");
    }

    #[test]
    fn lookup_name_leaves_other_names_alone() {
        for name in [
            "numpy",
            "scikit-image",
            "Scikit-Learn",
            "scikit_learn",
            "python-dateutil",
            "typing-extensions",
        ] {
            assert_eq!(lookup_name(name), name);
        }
    }

    #[test]
    fn normalize_collapses_separator_runs() {
        assert_eq!(normalize_name("Zope.Interface"), "zope_interface");
        assert_eq!(normalize_name("a-_-b"), "a_b");
        assert_eq!(normalize_name("scikit-learn"), "scikit_learn");
        assert_eq!(normalize_name("PyYAML"), "pyyaml");
    }

    #[test]
    fn resolver_queries_index_with_lookup_name() {
        let index = RecordingIndex::new(&[("scikit_learn", "1.4.2"), ("numpy", "1.26.4")]);
        let mut resolver = VersionResolver::new(index);

        assert_eq!(
            resolver.installed_version("scikit-learn").as_deref(),
            Some("1.4.2")
        );
        assert_eq!(resolver.installed_version("numpy").as_deref(), Some("1.26.4"));
        assert_eq!(
            *resolver.index().queries.borrow(),
            vec!["scikit_learn".to_string(), "numpy".to_string()]
        );
    }

    #[test]
    fn resolver_reports_absence_as_none() {
        let mut resolver = VersionResolver::new(RecordingIndex::new(&[]));
        assert_eq!(resolver.installed_version("requests"), None);
    }

    #[test]
    fn resolver_queries_each_name_once() {
        let mut resolver = VersionResolver::new(RecordingIndex::new(&[("rich", "13.7.1")]));
        resolver.installed_version("rich");
        resolver.installed_version("rich");
        resolver.installed_version("absent");
        resolver.installed_version("absent");
        assert_eq!(resolver.index().queries.borrow().len(), 2);
    }

    #[test]
    fn hashmap_is_a_package_index() {
        let mut installed = HashMap::new();
        installed.insert("attrs".to_string(), "23.2.0".to_string());
        assert_eq!(installed.installed_version("attrs").as_deref(), Some("23.2.0"));
        assert_eq!(installed.installed_version("Attrs"), None);
    }

    #[test]
    fn default_source_is_python3() {
        assert_eq!(
            IndexSource::default(),
            IndexSource::Interpreter("python3".to_string())
        );
    }

    #[test]
    fn directory_source_scans_without_interpreter() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("attrs-23.2.0.dist-info");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("METADATA"), "Name: attrs\nVersion: 23.2.0\n").unwrap();

        let index = IndexSource::Directories(vec![temp.path().to_path_buf()])
            .build()
            .unwrap();
        assert_eq!(index.installed_version("attrs").as_deref(), Some("23.2.0"));
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_source_scans_reported_sys_path() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let site = temp.path().join("site-packages");
        let dist = site.join("attrs-23.2.0.dist-info");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("METADATA"), "Name: attrs\nVersion: 23.2.0\n").unwrap();

        let sys_path =
            serde_json::to_string(&["", "/nonexistent/python312.zip", site.to_str().unwrap()])
                .unwrap();
        let python = temp.path().join("python");
        std::fs::write(&python, format!("#!/bin/sh\necho '{}'\n", sys_path)).unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        let index = IndexSource::Interpreter(python.to_str().unwrap().to_string())
            .build()
            .unwrap();
        assert_eq!(index.installed_version("attrs").as_deref(), Some("23.2.0"));
        assert_eq!(index.installed_version("requests"), None);
    }
}
