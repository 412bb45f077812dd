//! Field identifiers, raw values and per-field status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Name of a form field.
///
/// The set is closed: every form has exactly these seven fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Phone,
    Terms,
}

impl FieldName {
    /// Number of fields in a form.
    pub const COUNT: usize = 7;

    /// All fields, in evaluation order.
    pub const ALL: [FieldName; Self::COUNT] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Age,
        FieldName::Phone,
        FieldName::Terms,
    ];

    /// The identifier used by hosts (`fullName`, `confirmPassword`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Terms => "terms",
        }
    }

    /// Position of this field in evaluation order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Raw value read from an input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text entered into an input.
    Text(String),
    /// Checked state of a checkbox.
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

/// Validation status of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    /// Not validated since the last reset or value change.
    #[default]
    Unvalidated,
    /// The last rule evaluation failed.
    Invalid,
    /// The last rule evaluation passed.
    Valid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        for name in FieldName::ALL {
            assert_eq!(name.as_str().parse::<FieldName>().unwrap(), name);
        }
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "nickname".parse::<FieldName>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref s) if s == "nickname"));
    }

    #[test]
    fn test_index_follows_evaluation_order() {
        for (i, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }
}
