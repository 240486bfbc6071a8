//! Form field value objects

use crate::phone::drop_last_digit;
use crate::validation::{validate_value, ValidationError};
use std::fmt;

/// Identifier of every field the vet-call form declares, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Phone,
    Address,
    PetType,
    PetName,
    PetAge,
    Problem,
    Urgency,
    PreferredTime,
    Comments,
}

impl FieldId {
    pub const ALL: [FieldId; 10] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Address,
        FieldId::PetType,
        FieldId::PetName,
        FieldId::PetAge,
        FieldId::Problem,
        FieldId::Urgency,
        FieldId::PreferredTime,
        FieldId::Comments,
    ];

    /// Key used for the field in the submission payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::PetType => "pet_type",
            Self::PetName => "pet_name",
            Self::PetAge => "pet_age",
            Self::Problem => "problem",
            Self::Urgency => "urgency",
            Self::PreferredTime => "preferred_time",
            Self::Comments => "comments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Ваше имя *",
            Self::Phone => "Телефон *",
            Self::Address => "Адрес *",
            Self::PetType => "Вид животного",
            Self::PetName => "Кличка питомца",
            Self::PetAge => "Возраст питомца",
            Self::Problem => "Описание проблемы *",
            Self::Urgency => "Срочность",
            Self::PreferredTime => "Удобное время",
            Self::Comments => "Комментарии",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Name | Self::Phone | Self::Address | Self::Problem)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::PetType => FieldKind::Choice(&["cat", "dog", "bird", "rodent", "other"]),
            Self::Urgency => FieldKind::Choice(&["low", "medium", "high"]),
            Self::PreferredTime => FieldKind::Choice(&["morning", "afternoon", "evening"]),
            Self::Problem | Self::Comments => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// One of a fixed set of values; empty means "not chosen"
    Choice(&'static [&'static str]),
}

/// Represents a single form field with its value and current validity
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    /// Error shown next to the field; `None` means no annotation
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Create an empty field as declared by its identifier
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: String::new(),
            required: id.is_required(),
            kind: id.kind(),
            error: None,
        }
    }

    /// Create a field with an initial value
    #[cfg(test)]
    pub fn with_value(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(id)
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    /// Trimmed value, as it would be submitted
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Whether the error annotation is currently displayed
    pub fn shows_error(&self) -> bool {
        self.error.is_some()
    }

    /// Run the field's rules without touching its annotation
    pub fn check(&self) -> Result<(), ValidationError> {
        validate_value(self.id, self.required, &self.value)
    }

    /// Run the field's rules and attach or clear the error annotation
    pub fn validate(&mut self) -> bool {
        self.error = self.check().err();
        self.error.is_none()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value (ignored for choice fields)
    pub fn push_char(&mut self, c: char) {
        if !matches!(self.kind, FieldKind::Choice(_)) {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value.
    /// The phone drops its last digit, since mask separators come back on reformat.
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Choice(_) => self.value.clear(),
            _ if self.id == FieldId::Phone => self.value = drop_last_digit(&self.value),
            _ => {
                self.value.pop();
            }
        }
    }

    /// Move a choice field to the next option, wrapping through "not chosen"
    pub fn next_choice(&mut self) {
        if let FieldKind::Choice(options) = self.kind {
            let next = match options.iter().position(|o| *o == self.value) {
                None => options.first(),
                Some(i) => options.get(i + 1),
            };
            self.value = next.map(|s| s.to_string()).unwrap_or_default();
        }
    }

    /// Move a choice field to the previous option, wrapping through "not chosen"
    pub fn prev_choice(&mut self) {
        if let FieldKind::Choice(options) = self.kind {
            let prev = match options.iter().position(|o| *o == self.value) {
                None => options.last(),
                Some(0) => None,
                Some(i) => options.get(i - 1),
            };
            self.value = prev.map(|s| s.to_string()).unwrap_or_default();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) if self.value.is_empty() => "(не выбрано)".to_string(),
            FieldKind::Choice(_) => format!("◂ {} ▸", self.value),
            _ => self.value.clone(),
        }
    }
}
