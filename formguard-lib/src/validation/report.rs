use serde::Serialize;

use crate::error::{FieldError, ValidationErrorKind};
use crate::field::{FieldName, FieldStatus};

/// Result of evaluating one field's rule chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Every rule passed.
    #[default]
    Valid,
    /// A rule failed.
    Invalid(FieldError),
}

impl Outcome {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The error, if the field failed.
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// The user-facing message, if the field failed.
    pub fn message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }

    /// The failed rule's kind, if the field failed.
    pub fn kind(&self) -> Option<ValidationErrorKind> {
        self.error().map(|e| e.kind)
    }

    /// The status a field takes after this outcome.
    pub fn status(&self) -> FieldStatus {
        match self {
            Self::Valid => FieldStatus::Valid,
            Self::Invalid(_) => FieldStatus::Invalid,
        }
    }
}

/// Outcomes of every field, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    outcomes: Vec<(FieldName, Outcome)>,
}

impl ValidationReport {
    pub(crate) fn new(outcomes: Vec<(FieldName, Outcome)>) -> Self {
        Self { outcomes }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_valid())
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Outcome of a single field.
    pub fn outcome(&self, name: FieldName) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, outcome)| outcome)
    }

    /// All outcomes, in evaluation order.
    pub fn outcomes(&self) -> impl Iterator<Item = (FieldName, &Outcome)> {
        self.outcomes.iter().map(|(n, outcome)| (*n, outcome))
    }

    /// All validation errors, in evaluation order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.outcomes.iter().filter_map(|(_, outcome)| outcome.error())
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().next()
    }

    /// Get the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<FieldName> {
        self.first_error().map(|e| e.field)
    }
}
