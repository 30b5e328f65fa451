//! Visual theme and styling.

use console::Style;

use crate::checks::VerdictKind;

/// The validator's visual theme.
#[derive(Debug, Clone)]
pub struct ValidatorTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warning verdicts (yellow).
    pub warning: Style,
    /// Style for failing checks and errors (red).
    pub error: Style,
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for rules and secondary text (dim).
    pub dim: Style,
    /// Style for labels such as `Recommendation:` (bold).
    pub key: Style,
}

impl Default for ValidatorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a verdict status token.
    pub fn verdict(&self, kind: VerdictKind) -> &Style {
        match kind {
            VerdictKind::Pass => &self.success,
            VerdictKind::Warning => &self.warning,
            VerdictKind::Failure => &self.error,
        }
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
///
/// `no_color` is the `--no-color` flag.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
