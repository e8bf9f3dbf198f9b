//! Form state management for the intake form

use super::field::{FieldId, FormAnswers, ValidationFlags};
use super::validation::validate;
use crate::state::catalog::{
    next_state_starting_with, state_index, BRAZILIAN_STATES, USAGE_CATEGORIES,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field(FieldId),
    SubmitButton,
}

/// Dropdown used to pick a state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePicker {
    pub is_open: bool,
    /// Highlighted row in [`BRAZILIAN_STATES`]
    pub highlighted: usize,
}

/// The intake form: answers, their validation flags and focus state
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    answers: FormAnswers,
    flags: ValidationFlags,
    pub active_field_index: usize,
    pub state_picker: StatePicker,
    /// Highlighted row in [`USAGE_CATEGORIES`]
    pub usage_cursor: usize,
}

impl IntakeForm {
    /// Index of the submit button in focus order
    pub const SUBMIT_INDEX: usize = FieldId::ALL.len();

    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    pub fn flags(&self) -> &ValidationFlags {
        &self.flags
    }

    /// Replace a field value.
    ///
    /// Any edit clears that field's flag, even when the new value is empty.
    /// The flag comes back only on the next [`IntakeForm::revalidate`].
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        *self.answers.slot_mut(field) = value.into();
        if self.flags.is_invalid(field) {
            self.flags.clear(field);
        }
    }

    /// Recompute all flags from the current answers and store them wholesale
    pub fn revalidate(&mut self) -> bool {
        let (valid, flags) = validate(&self.answers);
        self.flags = flags;
        valid
    }

    /// Slot that currently has focus
    pub fn active_slot(&self) -> FormSlot {
        FieldId::ALL
            .get(self.active_field_index)
            .map(|f| FormSlot::Field(*f))
            .unwrap_or(FormSlot::SubmitButton)
    }

    /// Move focus to a field
    pub fn focus(&mut self, field: FieldId) {
        self.close_state_picker();
        self.active_field_index = FieldId::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
    }

    /// Move focus to the first flagged field, if any
    pub fn focus_first_invalid(&mut self) {
        if let Some(field) = self.flags.missing_fields().first() {
            self.focus(*field);
        }
    }

    fn active_text_field(&self) -> Option<FieldId> {
        match self.active_slot() {
            FormSlot::Field(f) if f.is_text() => Some(f),
            _ => None,
        }
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) -> bool {
        let Some(field) = self.active_text_field() else {
            return false;
        };
        let mut value = self.answers.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
        true
    }

    /// Remove the last character of the focused text field
    pub fn pop_char(&mut self) -> bool {
        let Some(field) = self.active_text_field() else {
            return false;
        };
        let mut value = self.answers.get(field).to_string();
        value.pop();
        self.set_field(field, value);
        true
    }

    /// Empty the focused text field
    pub fn clear_active_text(&mut self) -> bool {
        let Some(field) = self.active_text_field() else {
            return false;
        };
        self.set_field(field, String::new());
        true
    }

    // =========== State picker ===========

    /// Open the dropdown, highlighting the current choice
    pub fn open_state_picker(&mut self) {
        self.state_picker = StatePicker {
            is_open: true,
            highlighted: state_index(&self.answers.state).unwrap_or(0),
        };
    }

    /// Open the dropdown straight on a state starting with `letter`.
    ///
    /// With no state chosen yet the search starts at the top of the list,
    /// otherwise it continues after the current choice.
    pub fn open_state_picker_at(&mut self, letter: char) {
        self.open_state_picker();
        let from = state_index(&self.answers.state);
        if let Some(index) = next_state_starting_with(letter, from) {
            self.state_picker.highlighted = index;
        }
    }

    pub fn close_state_picker(&mut self) {
        self.state_picker.is_open = false;
    }

    pub fn toggle_state_picker(&mut self) {
        if self.state_picker.is_open {
            self.close_state_picker();
        } else {
            self.open_state_picker();
        }
    }

    pub fn picker_next(&mut self) {
        if self.state_picker.highlighted + 1 < BRAZILIAN_STATES.len() {
            self.state_picker.highlighted += 1;
        }
    }

    pub fn picker_prev(&mut self) {
        self.state_picker.highlighted = self.state_picker.highlighted.saturating_sub(1);
    }

    pub fn picker_first(&mut self) {
        self.state_picker.highlighted = 0;
    }

    pub fn picker_last(&mut self) {
        self.state_picker.highlighted = BRAZILIAN_STATES.len() - 1;
    }

    /// Jump to the next state starting with `letter`
    pub fn picker_jump(&mut self, letter: char) {
        if let Some(index) =
            next_state_starting_with(letter, Some(self.state_picker.highlighted))
        {
            self.state_picker.highlighted = index;
        }
    }

    /// Store the highlighted state and close the dropdown
    pub fn picker_confirm(&mut self) {
        let state = BRAZILIAN_STATES[self.state_picker.highlighted];
        self.set_field(FieldId::State, state);
        self.close_state_picker();
    }

    // =========== Usage choices ===========

    pub fn usage_next(&mut self) {
        if self.usage_cursor + 1 < USAGE_CATEGORIES.len() {
            self.usage_cursor += 1;
        }
    }

    pub fn usage_prev(&mut self) {
        self.usage_cursor = self.usage_cursor.saturating_sub(1);
    }

    /// Select a usage option by its position; out-of-range is ignored
    pub fn select_usage(&mut self, index: usize) {
        if let Some(category) = USAGE_CATEGORIES.get(index) {
            self.usage_cursor = index;
            self.set_field(FieldId::UsageCategory, category.code);
        }
    }

    pub fn select_highlighted_usage(&mut self) {
        self.select_usage(self.usage_cursor);
    }
}

impl Form for IntakeForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_INDEX + 1 // four answers plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.close_state_picker();
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
