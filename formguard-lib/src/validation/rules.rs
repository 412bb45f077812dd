//! Rule chain builder.

use regex::Regex;

use super::report::Outcome;
use crate::error::{FieldError, ValidationErrorKind};
use crate::field::FieldName;

/// Type alias for rule predicates.
type Check<'a, V> = Box<dyn Fn(&V) -> bool + Send + Sync + 'a>;

struct Rule<'a, V: ?Sized> {
    check: Check<'a, V>,
    kind: ValidationErrorKind,
    message: String,
}

/// Ordered chain of rules for a single field.
///
/// Rules are evaluated in the order they were added. The first rule whose
/// predicate returns `false` produces the outcome.
///
/// # Example
///
/// ```ignore
/// let rules = Rules::<str>::new(FieldName::FullName)
///     .required("Full name is required")
///     .min_length(2, "Full name must be at least 2 characters");
///
/// assert!(rules.check("Jo").is_valid());
/// ```
pub struct Rules<'a, V: ?Sized> {
    field: FieldName,
    rules: Vec<Rule<'a, V>>,
}

impl<'a, V: ?Sized> Rules<'a, V> {
    /// Create an empty chain for a field.
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, kind: ValidationErrorKind, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'a,
    {
        self.rules.push(Rule {
            check: Box::new(f),
            kind,
            message: msg.into(),
        });
        self
    }

    /// Evaluate the chain against a value.
    pub fn check(&self, value: &V) -> Outcome {
        self.rules
            .iter()
            .find(|rule| !(rule.check)(value))
            .map_or(Outcome::Valid, |rule| {
                Outcome::Invalid(FieldError::new(self.field, rule.kind, rule.message.clone()))
            })
    }
}

// Built-in rules for text values
impl<'a> Rules<'a, str> {
    /// Require the value to be non-empty after trimming whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), ValidationErrorKind::Required, msg)
    }

    /// Require the value to be non-empty. Whitespace counts as content.
    pub fn not_empty(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), ValidationErrorKind::Required, msg)
    }

    /// Require a minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| v.chars().count() >= min,
            ValidationErrorKind::TooShort,
            msg,
        )
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(
            move |v| re.is_match(v),
            ValidationErrorKind::PatternMismatch,
            msg,
        )
    }

    /// Require at least one character satisfying a predicate.
    pub fn contains_char<P>(self, pred: P, msg: impl Into<String>) -> Self
    where
        P: Fn(char) -> bool + Send + Sync + 'a,
    {
        self.rule(
            move |v| v.chars().any(&pred),
            ValidationErrorKind::PatternMismatch,
            msg,
        )
    }

    /// Require the value to equal another value exactly.
    pub fn equals(self, other: &'a str, msg: impl Into<String>) -> Self {
        self.rule(move |v| v == other, ValidationErrorKind::Mismatch, msg)
    }
}

// Built-in rules for bool values
impl Rules<'_, bool> {
    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|&v| v, ValidationErrorKind::Required, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_wins() {
        let rules = Rules::<str>::new(FieldName::FullName)
            .required("required")
            .min_length(3, "short")
            .pattern(r"^\d+$", "digits");

        let outcome = rules.check("a");
        assert_eq!(outcome.message(), Some("short"));
        assert_eq!(outcome.kind(), Some(ValidationErrorKind::TooShort));
    }

    #[test]
    fn test_all_rules_pass() {
        let rules = Rules::<str>::new(FieldName::Phone)
            .required("required")
            .min_length(2, "short");
        assert!(rules.check("123").is_valid());
    }

    #[test]
    fn test_required_ignores_whitespace() {
        let rules = Rules::<str>::new(FieldName::Email).required("required");
        assert_eq!(rules.check("   ").message(), Some("required"));
    }

    #[test]
    fn test_not_empty_keeps_whitespace() {
        let rules = Rules::<str>::new(FieldName::Password).not_empty("required");
        assert!(rules.check("   ").is_valid());
        assert_eq!(rules.check("").kind(), Some(ValidationErrorKind::Required));
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = Rules::<str>::new(FieldName::FullName).min_length(2, "short");
        assert!(rules.check("éé").is_valid());
    }

    #[test]
    fn test_equals_borrows_other_value() {
        let password = String::from("secret");
        let rules = Rules::<str>::new(FieldName::ConfirmPassword).equals(&password, "mismatch");
        assert!(rules.check("secret").is_valid());
        assert_eq!(
            rules.check("Secret").kind(),
            Some(ValidationErrorKind::Mismatch)
        );
    }

    #[test]
    fn test_checked() {
        let rules = Rules::<bool>::new(FieldName::Terms).checked("accept");
        assert!(rules.check(&true).is_valid());
        assert_eq!(rules.check(&false).message(), Some("accept"));
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let rules: Rules<'_, str> = Rules::new(FieldName::Age);
        assert!(rules.check("anything").is_valid());
    }
}
