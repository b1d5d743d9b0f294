//! Report rendering.

use crate::manifest::SkippedSpecifier;
use crate::ui::UserInterface;

use super::{CheckReport, PackageCheck, PackageStatus};

/// Title of the banner shown at the start of a run.
pub const BANNER_TITLE: &str = "Testing Python Package Versions";

/// Show the banner that opens a run.
pub fn show_banner(ui: &mut dyn UserInterface) {
    ui.show_header(BANNER_TITLE);
}

/// Warn about dependency strings that were not checked.
pub fn show_skipped(ui: &mut dyn UserInterface, skipped: &[SkippedSpecifier]) {
    for spec in skipped {
        ui.warning(&spec.warning());
    }
}

/// Show the result line for one package.
pub fn show_check(ui: &mut dyn UserInterface, check: &PackageCheck) {
    match &check.status {
        PackageStatus::Matched => ui.success(&format!("{}: {}", check.name, check.actual())),
        PackageStatus::VersionMismatch { installed } => ui.error(&format!(
            "{}: {} (expected {})",
            check.name, installed, check.expected
        )),
        PackageStatus::Missing => ui.error(&format!(
            "{}: {} (expected {})",
            check.name,
            check.actual(),
            check.expected
        )),
    }
}

/// Show the summary counts and, if anything failed, the failure breakdown.
pub fn show_summary(ui: &mut dyn UserInterface, report: &CheckReport) {
    ui.message("");
    ui.show_header(&format!(
        "Summary: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    ));

    if report.passed() {
        return;
    }

    ui.message("");
    ui.message("Failed tests:");
    for failure in report.failures() {
        ui.message(&format!("  - {}: {}", failure.name, failure.status.label()));
        ui.message(&format!("    Expected: {}", failure.expected));
        ui.message(&format!("    Actual: {}", failure.actual()));
    }
}
