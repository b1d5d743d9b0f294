//! Library integration tests.

use pincheck::manifest::{ExactPin, Manifest, ManifestLocator};
use pincheck::report::{CheckReport, PackageStatus};
use pincheck::resolver::{lookup_name, IndexSource, VersionResolver};
use pincheck::PincheckError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = PincheckError::ManifestNotFound {
        searched: vec![PathBuf::from("pyproject.toml")],
    };
    assert!(err.to_string().contains("pyproject.toml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pincheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pincheck::cli::Cli;

    let cli = Cli::parse_from(["pincheck", "--quiet", "--python", "python3.12"]);
    assert!(cli.quiet);
    assert_eq!(cli.python.as_deref(), Some("python3.12"));
}

#[test]
fn full_check_workflow() {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("pyproject.toml");
    fs::write(
        &manifest_path,
        r#"
[project]
name = "analysis"
dependencies = [
    "numpy==1.26.4",        # arrays
    "scikit-learn==1.4.2",
    "pandas==2.2.1",
    "requests==2.31.0",
    "matplotlib>=3.8",
]

[tool.pincheck]
site-packages = ["venv/site-packages"]
"#,
    )
    .unwrap();

    let site = temp.path().join("venv").join("site-packages");
    for (dir, name, version) in [
        ("numpy-1.26.4.dist-info", "numpy", "1.26.4"),
        ("scikit_learn-1.4.2.dist-info", "scikit-learn", "1.4.2"),
        ("pandas-2.1.0.dist-info", "pandas", "2.1.0"),
    ] {
        let dist = site.join(dir);
        fs::create_dir_all(&dist).unwrap();
        fs::write(
            dist.join("METADATA"),
            format!("Name: {}\nVersion: {}\n", name, version),
        )
        .unwrap();
    }

    let path = ManifestLocator::with_candidates(vec![
        temp.path().join("missing").join("pyproject.toml"),
        manifest_path.clone(),
    ])
    .locate()
    .unwrap();
    assert_eq!(path, manifest_path);

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.pins.len(), 4);
    assert_eq!(manifest.skipped.len(), 1);

    let source = IndexSource::Directories(manifest.settings.site_packages.clone().unwrap());
    let mut resolver = VersionResolver::new(source.build().unwrap());
    let report = CheckReport::check(&manifest.pins, &mut resolver);

    let statuses: Vec<(&str, &PackageStatus)> = report
        .checks
        .iter()
        .map(|c| (c.name.as_str(), &c.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("numpy", &PackageStatus::Matched),
            ("scikit-learn", &PackageStatus::Matched),
            (
                "pandas",
                &PackageStatus::VersionMismatch {
                    installed: "2.1.0".to_string()
                }
            ),
            ("requests", &PackageStatus::Missing),
        ]
    );
    assert_eq!(report.passed_count(), 2);
    assert_eq!(report.failed_count(), 2);
    assert!(!report.passed());
}

#[test]
fn only_scikit_learn_is_renamed() {
    assert_eq!(lookup_name("scikit-learn"), "scikit_learn");
    assert_eq!(lookup_name("scikit-image"), "scikit-image");
    assert_eq!(lookup_name("numpy"), "numpy");
}

#[test]
fn exact_pin_is_constructible() {
    let pin = ExactPin::new("rich", "13.7.1");
    assert_eq!(pin.name, "rich");
    assert_eq!(pin.version, "13.7.1");
}
