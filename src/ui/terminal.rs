//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, UserInterface, ValidatorTheme};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ValidatorTheme,
    use_color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI. `no_color` is the `--no-color` flag.
    pub fn new(no_color: bool) -> Self {
        let use_color = should_use_colors(no_color);

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ValidatorTheme::for_color(use_color),
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn report(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn use_color(&self) -> bool {
        self.use_color
    }
}
