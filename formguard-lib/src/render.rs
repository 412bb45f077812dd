//! View snapshots for hosts to render.
//!
//! The validator never touches a UI. Hosts call
//! [`crate::FormValidator::view`] after each event or timer and draw the
//! returned [`FormView`] however they like.

use serde::Serialize;

use crate::field::{FieldName, FieldStatus, FieldValue};
use crate::state::FormState;
use crate::validation::FormValues;

/// Visual class applied to a field's input element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum VisualClass {
    /// No validation styling.
    #[default]
    Neutral,
    /// Error styling.
    Error,
    /// Success styling.
    Success,
}

impl From<FieldStatus> for VisualClass {
    fn from(status: FieldStatus) -> Self {
        match status {
            FieldStatus::Unvalidated => Self::Neutral,
            FieldStatus::Invalid => Self::Error,
            FieldStatus::Valid => Self::Success,
        }
    }
}

/// Which page of the form is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PageView {
    /// The editable form.
    #[default]
    Form,
    /// The confirmation shown after a valid submission.
    Success,
}

/// Render data for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub value: FieldValue,
    pub class: VisualClass,
    /// Text for the field's error slot; empty when nothing is shown.
    pub message: String,
}

/// Render data for the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub page: PageView,
    /// Field that should receive focus, if any.
    pub focused: Option<FieldName>,
    /// Every field, in evaluation order.
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub(crate) fn from_state(
        state: &FormState,
        page: PageView,
        focused: Option<FieldName>,
    ) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| {
                let field = state.field(name);
                FieldView {
                    name,
                    value: state.value(name),
                    class: field.status().into(),
                    message: field.displayed_message().to_string(),
                }
            })
            .collect();

        Self {
            page,
            focused,
            fields,
        }
    }

    /// Render data for one field.
    pub fn field(&self, name: FieldName) -> &FieldView {
        &self.fields[name.index()]
    }

    /// Fields currently showing error styling.
    pub fn errors(&self) -> impl Iterator<Item = &FieldView> {
        self.fields.iter().filter(|f| f.class == VisualClass::Error)
    }

    /// The raw values shown, as a snapshot hosts can save or re-check.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            // Each view value was read from a slot of the same kind.
            let _ = values.set(field.name, field.value.clone());
        }
        values
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::from_state(&FormState::default(), PageView::Form, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_values_round_trip_through_view() {
        let mut state = FormState::default();
        state.set_value(FieldName::FullName, "Ada Lovelace".into()).unwrap();
        state.set_value(FieldName::Age, "36".into()).unwrap();
        state.set_value(FieldName::Terms, true.into()).unwrap();

        let view = FormView::from_state(&state, PageView::Form, None);
        let values = view.values();
        assert_eq!(&values, state.values());
        assert_eq!(values.text(FieldName::FullName), Some("Ada Lovelace"));
        assert_eq!(values.get(FieldName::Terms), FieldValue::Checked(true));
        assert!(!validate(&values).is_valid());
    }

    #[test]
    fn test_default_view_has_empty_values() {
        assert_eq!(FormView::default().values(), FormValues::new());
    }
}
