//! Installed-distribution index built from `site-packages` directories.
//!
//! Each search directory is scanned (non-recursively) for `*.dist-info` and
//! `*.egg-info` entries. The first distribution seen for a normalized name
//! wins, so directories earlier on the search path shadow later ones the
//! same way they do for the Python import system.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::{parse_metadata, DistributionMetadata};
use super::{normalize_name, PackageIndex};

/// Installed distributions keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct SitePackagesIndex {
    distributions: HashMap<String, InstalledDistribution>,
}

/// A distribution found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledDistribution {
    /// Name as written in the metadata.
    pub name: String,
    pub version: String,
    /// The `.dist-info` / `.egg-info` entry it was read from.
    pub location: PathBuf,
}

impl SitePackagesIndex {
    /// Scan `search_path` in order.
    ///
    /// Entries that are not directories are ignored, as are distributions
    /// whose metadata cannot be read.
    pub fn scan(search_path: &[PathBuf]) -> Self {
        let mut index = Self::default();
        for dir in search_path {
            if !dir.is_dir() {
                tracing::trace!("Skipping non-directory search path entry {}", dir.display());
                continue;
            }
            index.scan_dir(dir);
        }
        tracing::debug!(
            "Indexed {} installed distributions from {} search path entries",
            index.len(),
            search_path.len()
        );
        index
    }

    fn scan_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot read {}: {}", dir.display(), e);
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        paths.sort();

        for path in paths {
            let Some(metadata_file) = metadata_file(&path) else {
                continue;
            };
            match read_metadata(&metadata_file) {
                Some(meta) => self.insert(meta, path),
                None => tracing::warn!(
                    "Ignoring {}: no readable Name/Version metadata",
                    path.display()
                ),
            }
        }
    }

    fn insert(&mut self, meta: DistributionMetadata, location: PathBuf) {
        let key = normalize_name(&meta.name);
        if let Some(existing) = self.distributions.get(&key) {
            tracing::debug!(
                "{} at {} is shadowed by {}",
                meta.name,
                location.display(),
                existing.location.display()
            );
            return;
        }
        self.distributions.insert(
            key,
            InstalledDistribution {
                name: meta.name,
                version: meta.version,
                location,
            },
        );
    }

    /// Look up a distribution by (unnormalized) name.
    pub fn get(&self, name: &str) -> Option<&InstalledDistribution> {
        self.distributions.get(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl PackageIndex for SitePackagesIndex {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.get(name).map(|d| d.version.clone())
    }
}

/// The metadata file for a distribution entry, if `path` is one.
fn metadata_file(path: &Path) -> Option<PathBuf> {
    let extension = path.extension()?.to_str()?;
    match extension {
        "dist-info" if path.is_dir() => Some(path.join("METADATA")),
        "egg-info" if path.is_dir() => Some(path.join("PKG-INFO")),
        // Legacy single-file egg-info holds PKG-INFO content directly.
        "egg-info" if path.is_file() => Some(path.to_path_buf()),
        _ => None,
    }
}

fn read_metadata(path: &Path) -> Option<DistributionMetadata> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };
    parse_metadata(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dist_info(site: &Path, dir_name: &str, name: &str, version: &str) {
        let dir = site.join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("METADATA"),
            format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n", name, version),
        )
        .unwrap();
    }

    #[test]
    fn indexes_dist_info_directories() {
        let temp = TempDir::new().unwrap();
        dist_info(temp.path(), "numpy-1.26.4.dist-info", "numpy", "1.26.4");
        dist_info(temp.path(), "pandas-2.2.1.dist-info", "pandas", "2.2.1");

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.installed_version("numpy").as_deref(), Some("1.26.4"));
        assert_eq!(index.installed_version("pandas").as_deref(), Some("2.2.1"));
        assert_eq!(index.installed_version("scipy"), None);
    }

    #[test]
    fn version_comes_from_metadata_not_directory_name() {
        let temp = TempDir::new().unwrap();
        dist_info(temp.path(), "weird-0.0.0.dist-info", "weird", "3.1.4");

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert_eq!(index.installed_version("weird").as_deref(), Some("3.1.4"));
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        let temp = TempDir::new().unwrap();
        dist_info(
            temp.path(),
            "scikit_learn-1.4.2.dist-info",
            "scikit-learn",
            "1.4.2",
        );
        dist_info(temp.path(), "PyYAML-6.0.1.dist-info", "PyYAML", "6.0.1");

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert_eq!(index.installed_version("scikit_learn").as_deref(), Some("1.4.2"));
        assert_eq!(index.installed_version("Scikit.Learn").as_deref(), Some("1.4.2"));
        assert_eq!(index.installed_version("pyyaml").as_deref(), Some("6.0.1"));
    }

    #[test]
    fn earlier_search_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        dist_info(first.path(), "rich-13.7.1.dist-info", "rich", "13.7.1");
        dist_info(second.path(), "rich-12.0.0.dist-info", "rich", "12.0.0");

        let index = SitePackagesIndex::scan(&[
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(index.installed_version("rich").as_deref(), Some("13.7.1"));
        assert_eq!(
            index.get("rich").unwrap().location,
            first.path().join("rich-13.7.1.dist-info")
        );
    }

    #[test]
    fn reads_egg_info_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let egg_dir = temp.path().join("legacy_pkg-0.9.egg-info");
        fs::create_dir_all(&egg_dir).unwrap();
        fs::write(egg_dir.join("PKG-INFO"), "Name: legacy-pkg\nVersion: 0.9\n").unwrap();
        fs::write(
            temp.path().join("flat-1.0.egg-info"),
            "Metadata-Version: 1.0\nName: flat\nVersion: 1.0\n",
        )
        .unwrap();

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert_eq!(index.installed_version("legacy-pkg").as_deref(), Some("0.9"));
        assert_eq!(index.installed_version("flat").as_deref(), Some("1.0"));
    }

    #[test]
    fn skips_unreadable_metadata() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("broken-1.0.dist-info")).unwrap();
        dist_info(temp.path(), "ok-1.0.dist-info", "ok", "1.0");

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.installed_version("broken"), None);
    }

    #[test]
    fn ignores_missing_and_non_directory_entries() {
        let temp = TempDir::new().unwrap();
        let zip = temp.path().join("python312.zip");
        fs::write(&zip, "").unwrap();

        let index = SitePackagesIndex::scan(&[zip, temp.path().join("missing")]);
        assert!(index.is_empty());
    }

    #[test]
    fn ignores_package_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("numpy")).unwrap();

        let index = SitePackagesIndex::scan(&[temp.path().to_path_buf()]);
        assert!(index.is_empty());
    }
}
