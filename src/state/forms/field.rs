//! Form field value objects

use std::fmt;

/// Identifies one of the four answers collected by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    City,
    State,
    UsageCategory,
}

impl FieldId {
    /// All fields in focus order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::City,
        FieldId::State,
        FieldId::UsageCategory,
    ];

    /// Stable key used in logs and errors
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::UsageCategory => "usage_category",
        }
    }

    /// Question shown above the field
    pub fn question(self) -> &'static str {
        match self {
            Self::Name => "Qual é o seu nome?",
            Self::City => "Em qual cidade você mora?",
            Self::State => "Em qual estado você mora?",
            Self::UsageCategory => "Como você utilizar a internet?",
        }
    }

    /// Inline message shown while the field is flagged
    pub fn error_message(self) -> &'static str {
        match self {
            Self::UsageCategory => "Selecione uma opção",
            _ => "Este campo é obrigatório",
        }
    }

    /// Whether the field accepts free text typed by the user
    pub fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::City)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values entered so far.
///
/// `state` and `usage_category` hold the empty string while unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormAnswers {
    pub name: String,
    pub city: String,
    pub state: String,
    pub usage_category: String,
}

impl FormAnswers {
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        usage_category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            usage_category: usage_category.into(),
        }
    }

    /// Get the value of a field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::UsageCategory => &self.usage_category,
        }
    }

    pub(super) fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::UsageCategory => &mut self.usage_category,
        }
    }
}

/// Per-field "currently invalid" markers, parallel to [`FormAnswers`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationFlags {
    pub name: bool,
    pub city: bool,
    pub state: bool,
    pub usage_category: bool,
}

impl ValidationFlags {
    /// Whether the given field is flagged
    pub fn is_invalid(&self, field: FieldId) -> bool {
        match field {
            FieldId::Name => self.name,
            FieldId::City => self.city,
            FieldId::State => self.state,
            FieldId::UsageCategory => self.usage_category,
        }
    }

    /// Clear the flag of a single field
    pub fn clear(&mut self, field: FieldId) {
        match field {
            FieldId::Name => self.name = false,
            FieldId::City => self.city = false,
            FieldId::State => self.state = false,
            FieldId::UsageCategory => self.usage_category = false,
        }
    }

    /// True if any field is flagged
    pub fn any(&self) -> bool {
        FieldId::ALL.iter().any(|f| self.is_invalid(*f))
    }

    /// Flagged fields in focus order
    pub fn missing_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .collect()
    }
}
