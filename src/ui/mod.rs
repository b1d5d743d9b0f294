//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing the report to stdout
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pincheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Normal, true);
//! ui.show_header("Testing Python Package Versions");
//! ui.success("numpy: 1.26.4");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PincheckTheme, RULE_WIDTH};

/// Trait for user interface interactions.
///
/// Implementations decide what to show for the current [`OutputMode`];
/// callers always report everything.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a diagnostic line (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Show a header framed by rules.
    fn show_header(&mut self, title: &str);
}
