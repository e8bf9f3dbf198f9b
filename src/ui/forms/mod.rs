//! Form rendering module
//!
//! This module contains UI components for rendering the intake form:
//! - `field_renderer`: Input box and inline error helpers
//! - `intake_form`: Layout of the four questions and the submit button
//! - `state_picker`: State dropdown overlay
//! - `usage_choices`: Internet usage radio list

mod field_renderer;
mod intake_form;
mod state_picker;
mod usage_choices;

pub use intake_form::draw as draw_intake;
