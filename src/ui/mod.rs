//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`ValidatorTheme`] for colors
//!
//! # Example
//!
//! ```
//! use fargate_validator::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking task definition");
//! ui.error("Task definition not found");
//!
//! assert_eq!(ui.messages(), ["Checking task definition"]);
//! assert_eq!(ui.errors(), ["Task definition not found"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ValidatorTheme};

/// Trait for user interface interactions.
///
/// Reports and messages go to standard output; errors go to standard error. This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write a rendered report verbatim.
    fn report(&mut self, text: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Whether output may contain ANSI colors.
    fn use_color(&self) -> bool;
}
