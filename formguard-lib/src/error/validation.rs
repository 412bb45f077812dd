//! Validation error types

use serde::Serialize;

use crate::field::FieldName;

/// Category of a failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// The field is empty.
    Required,
    /// The value is shorter than allowed.
    TooShort,
    /// The value is longer than allowed.
    TooLong,
    /// The value does not have the required shape.
    PatternMismatch,
    /// The value does not equal the value it must repeat.
    Mismatch,
    /// The number is outside the allowed range.
    OutOfRange,
    /// The value is not a number.
    NotANumber,
}

/// Error information for a field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: FieldName,
    /// Which kind of rule failed.
    pub kind: ValidationErrorKind,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: FieldName, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}
