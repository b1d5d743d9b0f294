//! Visual theme and styling.

use console::Style;

/// Width of the `=` rules framing headers.
pub const RULE_WIDTH: usize = 60;

/// pincheck's visual theme.
#[derive(Debug, Clone)]
pub struct PincheckTheme {
    /// Style for passing packages (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failing packages and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for header titles (bold).
    pub header: Style,
    /// Style for header rules (dim).
    pub rule: Style,
}

impl Default for PincheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PincheckTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            rule: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            rule: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ Warning: {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header: the title between two `=` rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.rule.apply_to("=".repeat(RULE_WIDTH));
        format!("{}\n{}\n{}", rule, self.header.apply_to(title), rule)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
