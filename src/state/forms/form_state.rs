//! Form state and navigation

use super::field::{FieldId, FormField};

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
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the actions row below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Cancel,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Submit,
        }
    }
}

/// The vet-call request form: every declared field plus focus state
#[derive(Debug, Clone)]
pub struct VetCallForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the actions row
    pub selected_button: FormButton,
}

impl VetCallForm {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.iter().map(|id| FormField::new(*id)).collect(),
            active_field_index: 0,
            selected_button: FormButton::Submit,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_text(value);
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Whether any field holds non-blank text
    pub fn has_data(&self) -> bool {
        self.fields.iter().any(|f| !f.is_blank())
    }

    /// Identifier of the focused field, `None` on the actions row
    pub fn active_field_id(&self) -> Option<FieldId> {
        self.fields.get(self.active_field_index).map(|f| f.id)
    }

    /// Returns true if the actions row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    fn index_of(id: FieldId) -> usize {
        // FieldId::ALL is the render order, and `fields` is built from it
        FieldId::ALL
            .iter()
            .position(|candidate| *candidate == id)
            .unwrap_or_default()
    }
}

impl Default for VetCallForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for VetCallForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields, actions row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_all_fields_in_order() {
        let form = VetCallForm::new();
        let ids: Vec<_> = form.fields().iter().map(|f| f.id).collect();
        assert_eq!(ids, FieldId::ALL.to_vec());
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, FormButton::Submit);
    }

    #[test]
    fn test_field_lookup_by_id() {
        let mut form = VetCallForm::new();
        form.set_value(FieldId::Address, "ул. Ленина, 10");
        assert_eq!(form.value(FieldId::Address), "ул. Ленина, 10");
        assert_eq!(form.field(FieldId::Comments).id, FieldId::Comments);
    }

    #[test]
    fn test_required_fields() {
        let form = VetCallForm::new();
        assert_eq!(form.required_fields().count(), 4);
    }

    #[test]
    fn test_has_data_ignores_whitespace() {
        let mut form = VetCallForm::new();
        assert!(!form.has_data());
        form.set_value(FieldId::Comments, "   ");
        assert!(!form.has_data());
        form.set_value(FieldId::PetName, "Мурка");
        assert!(form.has_data());
    }

    #[test]
    fn test_field_count_includes_actions_row() {
        let form = VetCallForm::new();
        assert_eq!(form.field_count(), FieldId::ALL.len() + 1);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = VetCallForm::new();
        for _ in 0..form.field_count() {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_actions_row() {
        let mut form = VetCallForm::new();
        form.prev_field();
        assert!(form.is_buttons_row_active());
        assert!(form.active_field_id().is_none());
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = VetCallForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, FieldId::ALL.len());
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = VetCallForm::new();
        assert_eq!(form.get_field(0).unwrap().id, FieldId::Name);
        assert_eq!(form.get_field(1).unwrap().id, FieldId::Phone);
        assert_eq!(form.get_field(9).unwrap().id, FieldId::Comments);
        assert!(form.get_field(10).is_none());
    }

    #[test]
    fn test_button_toggle() {
        assert_eq!(FormButton::Submit.toggle(), FormButton::Cancel);
        assert_eq!(FormButton::Cancel.toggle(), FormButton::Submit);
    }
}
