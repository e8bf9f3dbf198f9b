//! Domain errors

use crate::state::FieldId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// One or more required answers are empty
    #[error("required fields missing: {}", join_fields(.0))]
    MissingFields(Vec<FieldId>),

    /// The system browser could not be started for the chat link
    #[error("failed to open chat link: {0}")]
    LaunchFailed(#[source] std::io::Error),

    /// Clipboard access failed
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
