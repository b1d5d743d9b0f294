//! The check command: manifest → installed versions → report.

use crate::config::CheckConfig;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::report::{show_banner, show_check, show_skipped, show_summary, CheckReport};
use crate::resolver::{lookup_name, IndexSource, VersionResolver};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// Exit code used when any pin is missing or mismatched.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    config: CheckConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        show_banner(ui);

        let path = self.config.locator().locate()?;
        ui.detail(&format!("Manifest: {}", path.display()));

        let manifest = Manifest::load(&path)?;
        show_skipped(ui, &manifest.skipped);

        let source = self.config.index_source(&manifest.settings);
        match &source {
            IndexSource::Interpreter(python) => {
                ui.detail(&format!("Installed packages: sys.path of {}", python))
            }
            IndexSource::Directories(dirs) => {
                for dir in dirs {
                    ui.detail(&format!("Installed packages: {}", dir.display()));
                }
            }
        }

        let mut resolver = VersionResolver::new(source.build()?);
        tracing::info!(
            "Checking {} pinned packages against {} installed distributions",
            manifest.pins.len(),
            resolver.index().len()
        );

        let report = CheckReport::check(&manifest.pins, &mut resolver);
        for check in &report.checks {
            show_check(ui, check);
            if let Some(dist) = resolver.index().get(lookup_name(&check.name)) {
                ui.detail(&format!("    from {}", dist.location.display()));
            }
        }

        show_summary(ui, &report);

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(FAILURE_EXIT_CODE))
        }
    }
}
