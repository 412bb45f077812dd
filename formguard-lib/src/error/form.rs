//! Errors raised by hosts driving a form

use thiserror::Error;

use crate::field::FieldName;

/// Errors caused by a host addressing the form incorrectly.
///
/// These are programming or input mistakes on the host side, not validation
/// failures; validation failures are reported as [`super::FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The name does not match any field of the form.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A text value was given for a checkbox, or a checked flag for a text field.
    #[error("field '{field}' expects a {expected} value")]
    ValueType {
        /// The field that was addressed.
        field: FieldName,
        /// Human-readable name of the expected value kind.
        expected: &'static str,
    },
}
