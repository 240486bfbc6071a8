//! Declarative event bindings
//!
//! Every UI or host event the controller reacts to is looked up in a static
//! table instead of being wired up imperatively.

use crate::state::FieldId;

/// Something that happened on the view or in the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed to `value`
    Input { field: FieldId, value: String },
    /// Focus left a field
    Blur(FieldId),
    /// The in-form submit control was clicked
    SubmitClicked,
    /// The host main button was clicked
    MainButtonClicked,
    /// The in-form cancel control was clicked
    CancelClicked,
    /// The device orientation (or terminal size) changed
    OrientationChanged,
    /// The user is trying to leave the view
    NavigateAway,
}

/// Kind of event a binding listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Input,
    Blur,
    SubmitClick,
    MainButtonClick,
    CancelClick,
    OrientationChange,
    BeforeUnload,
}

/// Which fields a field-level binding applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// Not a field event
    View,
    AnyField,
    Required,
    Only(FieldId),
}

impl FieldScope {
    fn matches(&self, field: Option<FieldId>) -> bool {
        match (self, field) {
            (FieldScope::View, None) => true,
            (FieldScope::AnyField, Some(_)) => true,
            (FieldScope::Required, Some(id)) => id.is_required(),
            (FieldScope::Only(only), Some(id)) => *only == id,
            _ => false,
        }
    }
}

/// Controller routine a binding runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    FormatPhone,
    ValidateField,
    UpdateMainButton,
    Submit,
    Cancel,
    ExpandAfterDelay,
    GuardLeave,
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub trigger: Trigger,
    pub scope: FieldScope,
    pub handler: Handler,
}

const fn bind(trigger: Trigger, scope: FieldScope, handler: Handler) -> Binding {
    Binding {
        trigger,
        scope,
        handler,
    }
}

/// The full wiring. Order matters: handlers for one event run top to bottom.
pub const BINDINGS: &[Binding] = &[
    bind(Trigger::Input, FieldScope::Only(FieldId::Phone), Handler::FormatPhone),
    bind(Trigger::Input, FieldScope::Required, Handler::ValidateField),
    bind(Trigger::Input, FieldScope::AnyField, Handler::UpdateMainButton),
    bind(Trigger::Blur, FieldScope::Required, Handler::ValidateField),
    bind(Trigger::SubmitClick, FieldScope::View, Handler::Submit),
    bind(Trigger::MainButtonClick, FieldScope::View, Handler::Submit),
    bind(Trigger::CancelClick, FieldScope::View, Handler::Cancel),
    bind(Trigger::OrientationChange, FieldScope::View, Handler::ExpandAfterDelay),
    bind(Trigger::BeforeUnload, FieldScope::View, Handler::GuardLeave),
];

impl FormEvent {
    pub fn trigger(&self) -> Trigger {
        match self {
            FormEvent::Input { .. } => Trigger::Input,
            FormEvent::Blur(_) => Trigger::Blur,
            FormEvent::SubmitClicked => Trigger::SubmitClick,
            FormEvent::MainButtonClicked => Trigger::MainButtonClick,
            FormEvent::CancelClicked => Trigger::CancelClick,
            FormEvent::OrientationChanged => Trigger::OrientationChange,
            FormEvent::NavigateAway => Trigger::BeforeUnload,
        }
    }

    /// The field the event targets, if it is a field event
    pub fn field(&self) -> Option<FieldId> {
        match self {
            FormEvent::Input { field, .. } => Some(*field),
            FormEvent::Blur(field) => Some(*field),
            _ => None,
        }
    }
}

/// Handlers bound to an event, in table order
pub fn handlers_for(event: &FormEvent) -> Vec<Handler> {
    let trigger = event.trigger();
    let field = event.field();
    BINDINGS
        .iter()
        .filter(|b| b.trigger == trigger && b.scope.matches(field))
        .map(|b| b.handler)
        .collect()
}
