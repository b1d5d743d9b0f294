//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PincheckTheme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: PincheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI; colors follow `NO_COLOR` and TTY detection.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PincheckTheme::new()
        } else {
            PincheckTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: PincheckTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_successes() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, PincheckTheme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
