//! Form domain layer
//!
//! Field declarations, per-field values and validity, and focus navigation
//! for the vet-call request form.

mod field;
mod form_state;

pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{Form, FormButton, VetCallForm};
