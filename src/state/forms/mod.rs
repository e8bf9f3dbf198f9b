//! Form domain layer
//!
//! Holds the answers collected by the intake form, their validation flags
//! and the keyboard focus that drives editing.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, FormAnswers};
pub use form_state::{Form, FormSlot, IntakeForm};
