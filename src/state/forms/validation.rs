//! Required-field validation

use super::field::{FormAnswers, ValidationFlags};

/// Check every required field independently.
///
/// Returns whether the answers are complete together with a fresh set of
/// flags. Text fields are trimmed before the emptiness check; menu-backed
/// fields only need to be non-empty.
pub fn validate(answers: &FormAnswers) -> (bool, ValidationFlags) {
    let flags = ValidationFlags {
        name: answers.name.trim().is_empty(),
        city: answers.city.trim().is_empty(),
        state: answers.state.is_empty(),
        usage_category: answers.usage_category.is_empty(),
    };

    (!flags.any(), flags)
}
