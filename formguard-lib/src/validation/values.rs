use serde::{Deserialize, Serialize};

use super::fields::check_field;
use super::report::ValidationReport;
use crate::error::FormError;
use crate::field::{FieldName, FieldValue};

/// Raw values of every field, as read from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub phone: String,
    pub terms: bool,
}

impl FormValues {
    /// Create empty values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, name: FieldName) -> FieldValue {
        match name {
            FieldName::Terms => FieldValue::Checked(self.terms),
            _ => FieldValue::Text(self.text(name).map(str::to_string).unwrap_or_default()),
        }
    }

    /// Current text of a text field, or `None` for the checkbox.
    pub fn text(&self, name: FieldName) -> Option<&str> {
        let text = match name {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Age => &self.age,
            FieldName::Phone => &self.phone,
            FieldName::Terms => return None,
        };
        Some(text)
    }

    /// Replace a field's value.
    ///
    /// Fails if the value kind does not match the field.
    pub fn set(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        let slot = match (name, value) {
            (FieldName::Terms, FieldValue::Checked(checked)) => {
                self.terms = checked;
                return Ok(());
            }
            (FieldName::Terms, FieldValue::Text(_)) => {
                return Err(FormError::ValueType {
                    field: name,
                    expected: "checked",
                });
            }
            (_, FieldValue::Checked(_)) => {
                return Err(FormError::ValueType {
                    field: name,
                    expected: "text",
                });
            }
            (FieldName::FullName, FieldValue::Text(text)) => (&mut self.full_name, text),
            (FieldName::Email, FieldValue::Text(text)) => (&mut self.email, text),
            (FieldName::Password, FieldValue::Text(text)) => (&mut self.password, text),
            (FieldName::ConfirmPassword, FieldValue::Text(text)) => {
                (&mut self.confirm_password, text)
            }
            (FieldName::Age, FieldValue::Text(text)) => (&mut self.age, text),
            (FieldName::Phone, FieldValue::Text(text)) => (&mut self.phone, text),
        };
        *slot.0 = slot.1;
        Ok(())
    }
}

/// Evaluate every field's rule chain, in evaluation order.
///
/// Every field is evaluated even after an earlier one fails.
pub fn validate(values: &FormValues) -> ValidationReport {
    ValidationReport::new(
        FieldName::ALL
            .into_iter()
            .map(|name| (name, check_field(name, values)))
            .collect(),
    )
}
