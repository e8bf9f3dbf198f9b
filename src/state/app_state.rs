//! Application state definitions

use super::forms::IntakeForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with brand animation
    Splash,
    #[default]
    Intake,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form
    pub form: IntakeForm,

    /// Link produced by the last successful submit
    pub last_link: Option<String>,

    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Whether an error dialog should be shown
    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
