//! Aggregate form state.

use crate::error::FormError;
use crate::field::{FieldName, FieldStatus, FieldValue};
use crate::validation::{FormValues, Outcome, validate};

/// Status and error bookkeeping for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    status: FieldStatus,
    message: String,
    message_hidden: bool,
}

impl FieldState {
    /// Current status.
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Message of the last failed evaluation (empty unless Invalid).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message to show next to the field; empty once the message is hidden.
    pub fn displayed_message(&self) -> &str {
        if self.message_hidden {
            ""
        } else {
            &self.message
        }
    }

    fn apply(&mut self, outcome: &Outcome) {
        self.status = outcome.status();
        self.message = outcome.message().unwrap_or_default().to_string();
        self.message_hidden = false;
    }
}

/// Values and per-field state of the whole form.
///
/// Created once per form; reset to empty values and unvalidated fields after
/// a successful submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    fields: [FieldState; FieldName::COUNT],
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of a field.
    pub fn value(&self, name: FieldName) -> FieldValue {
        self.values.get(name)
    }

    /// Replace a field's value without touching its status.
    pub fn set_value(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        self.values.set(name, value)
    }

    /// State of a single field.
    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[name.index()]
    }

    /// Record the outcome of evaluating a field.
    pub fn apply(&mut self, name: FieldName, outcome: &Outcome) {
        self.fields[name.index()].apply(outcome);
    }

    /// Return a field to Unvalidated with no message.
    pub fn clear(&mut self, name: FieldName) {
        self.fields[name.index()] = FieldState::default();
    }

    /// Hide an Invalid field's message while keeping its status.
    pub fn hide_message(&mut self, name: FieldName) {
        let field = &mut self.fields[name.index()];
        if field.status == FieldStatus::Invalid {
            field.message_hidden = true;
        }
    }

    /// Whether every field passes its rules with the current values.
    ///
    /// Always evaluated from the values, never from stored statuses.
    pub fn all_valid(&self) -> bool {
        validate(&self.values).is_valid()
    }

    /// First field, in evaluation order, whose status is Invalid.
    pub fn first_invalid(&self) -> Option<FieldName> {
        FieldName::ALL
            .into_iter()
            .find(|name| self.field(*name).status == FieldStatus::Invalid)
    }

    /// Empty every value and return every field to Unvalidated.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
