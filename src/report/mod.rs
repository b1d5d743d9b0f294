//! Classification of declared pins against installed versions.
//!
//! # Modules
//!
//! - [`render`] - Writing a report to a [`UserInterface`](crate::ui::UserInterface)

pub mod render;

use crate::manifest::ExactPin;
use crate::resolver::{PackageIndex, VersionResolver};

pub use render::{show_banner, show_check, show_skipped, show_summary, BANNER_TITLE};

/// Text used in place of a version for packages that are not installed.
pub const NOT_INSTALLED: &str = "NOT INSTALLED";

/// The result of comparing one pin with the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    /// Installed at exactly the pinned version.
    Matched,
    /// Installed at a different version.
    VersionMismatch { installed: String },
    /// Not installed.
    Missing,
}

impl PackageStatus {
    /// Whether this status counts as a failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, PackageStatus::Matched)
    }

    /// Label used in the failure breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Matched => "MATCHED",
            PackageStatus::VersionMismatch { .. } => "VERSION MISMATCH",
            PackageStatus::Missing => "MISSING",
        }
    }
}

/// One checked package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCheck {
    pub name: String,
    pub expected: String,
    pub status: PackageStatus,
}

impl PackageCheck {
    /// Classify a pin given the installed version (if any).
    pub fn classify(pin: &ExactPin, installed: Option<String>) -> Self {
        let status = match installed {
            None => PackageStatus::Missing,
            Some(version) if version != pin.version => {
                PackageStatus::VersionMismatch { installed: version }
            }
            Some(_) => PackageStatus::Matched,
        };
        Self {
            name: pin.name.clone(),
            expected: pin.version.clone(),
            status,
        }
    }

    /// The installed version, or `NOT INSTALLED`.
    pub fn actual(&self) -> &str {
        match &self.status {
            PackageStatus::Matched => &self.expected,
            PackageStatus::VersionMismatch { installed } => installed,
            PackageStatus::Missing => NOT_INSTALLED,
        }
    }
}

/// Results for every declared pin, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub checks: Vec<PackageCheck>,
}

impl CheckReport {
    /// Check every pin against the resolver.
    pub fn check<I: PackageIndex>(pins: &[ExactPin], resolver: &mut VersionResolver<I>) -> Self {
        let checks = pins
            .iter()
            .map(|pin| PackageCheck::classify(pin, resolver.installed_version(&pin.name)))
            .collect();
        Self { checks }
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.status.is_failure()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    /// Checks that failed, in manifest order.
    pub fn failures(&self) -> impl Iterator<Item = &PackageCheck> {
        self.checks.iter().filter(|c| c.status.is_failure())
    }

    /// True when nothing is missing or mismatched.
    pub fn passed(&self) -> bool {
        self.failed_count() == 0
    }
}
