//! Rule chains for each field of the sign-up form.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use super::report::Outcome;
use super::rules::Rules;
use super::values::FormValues;
use crate::error::ValidationErrorKind;
use crate::field::FieldName;

/// Minimum accepted age.
pub const MIN_AGE: i64 = 13;
/// Maximum accepted age.
pub const MAX_AGE: i64 = 120;
/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;
/// Maximum number of digits in a phone number.
pub const MAX_PHONE_DIGITS: usize = 15;
/// Characters that count as special in a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static FULL_NAME: LazyLock<Rules<'static, str>> = LazyLock::new(|| {
    Rules::<str>::new(FieldName::FullName)
        .required("Full name is required")
        .min_length(2, "Full name must be at least 2 characters")
        .pattern(r"^[a-zA-Z\s]+$", "Full name can only contain letters and spaces")
});

static EMAIL: LazyLock<Rules<'static, str>> = LazyLock::new(|| {
    Rules::<str>::new(FieldName::Email)
        .required("Email is required")
        .pattern(
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            "Please enter a valid email address",
        )
});

static PASSWORD: LazyLock<Rules<'static, str>> = LazyLock::new(|| {
    Rules::<str>::new(FieldName::Password)
        .not_empty("Password is required")
        .min_length(
            MIN_PASSWORD_LENGTH,
            "Password must be at least 8 characters long",
        )
        .contains_char(
            |c| c.is_ascii_uppercase(),
            "Password must contain at least one uppercase letter",
        )
        .contains_char(
            |c| c.is_ascii_lowercase(),
            "Password must contain at least one lowercase letter",
        )
        .contains_char(
            |c| c.is_ascii_digit(),
            "Password must contain at least one number",
        )
        .contains_char(
            |c| PASSWORD_SPECIAL_CHARS.contains(c),
            "Password must contain at least one special character",
        )
});

static AGE: LazyLock<Rules<'static, str>> = LazyLock::new(|| {
    Rules::<str>::new(FieldName::Age)
        .not_empty("Age is required")
        .rule(
            |v| parse_age(v).is_some(),
            ValidationErrorKind::NotANumber,
            "Please enter a valid number",
        )
        .rule(
            |v| parse_age(v).is_some_and(|age| age >= MIN_AGE),
            ValidationErrorKind::OutOfRange,
            "You must be at least 13 years old",
        )
        .rule(
            |v| parse_age(v).is_some_and(|age| age <= MAX_AGE),
            ValidationErrorKind::OutOfRange,
            "Please enter a valid age",
        )
});

static PHONE_DIGITS: LazyLock<Rules<'static, usize>> = LazyLock::new(|| {
    Rules::<usize>::new(FieldName::Phone)
        .rule(
            |&digits| digits >= MIN_PHONE_DIGITS,
            ValidationErrorKind::TooShort,
            "Phone number must be at least 10 digits",
        )
        .rule(
            |&digits| digits <= MAX_PHONE_DIGITS,
            ValidationErrorKind::TooLong,
            "Phone number cannot exceed 15 digits",
        )
});

static TERMS: LazyLock<Rules<'static, bool>> = LazyLock::new(|| {
    Rules::<bool>::new(FieldName::Terms).checked("You must accept the terms and conditions")
});

/// Parse an age as a whole number. Integers outside `i64` saturate so the
/// range rules still apply to them.
fn parse_age(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(age) => Some(age),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Validate a full name. Surrounding whitespace is ignored.
pub fn check_full_name(value: &str) -> Outcome {
    FULL_NAME.check(value.trim())
}

/// Validate an email address. Surrounding whitespace is ignored.
pub fn check_email(value: &str) -> Outcome {
    EMAIL.check(value.trim())
}

/// Validate a password.
pub fn check_password(value: &str) -> Outcome {
    PASSWORD.check(value)
}

/// Validate the password confirmation against the current password.
pub fn check_confirm_password(value: &str, password: &str) -> Outcome {
    Rules::<str>::new(FieldName::ConfirmPassword)
        .not_empty("Please confirm your password")
        .equals(password, "Passwords do not match")
        .check(value)
}

/// Validate an age given as raw text.
pub fn check_age(value: &str) -> Outcome {
    AGE.check(value)
}

/// Validate an optional phone number. Only digits are counted.
pub fn check_phone(value: &str) -> Outcome {
    if value.trim().is_empty() {
        return Outcome::Valid;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    PHONE_DIGITS.check(&digits)
}

/// Validate the terms checkbox.
pub fn check_terms(checked: bool) -> Outcome {
    TERMS.check(&checked)
}

/// Run a field's rule chain against the current form values.
pub fn check_field(name: FieldName, values: &FormValues) -> Outcome {
    match name {
        FieldName::FullName => check_full_name(&values.full_name),
        FieldName::Email => check_email(&values.email),
        FieldName::Password => check_password(&values.password),
        FieldName::ConfirmPassword => {
            check_confirm_password(&values.confirm_password, &values.password)
        }
        FieldName::Age => check_age(&values.age),
        FieldName::Phone => check_phone(&values.phone),
        FieldName::Terms => check_terms(values.terms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(outcome: Outcome) -> Option<String> {
        outcome.message().map(str::to_string)
    }

    #[test]
    fn test_full_name_rules_in_order() {
        assert_eq!(msg(check_full_name("")).as_deref(), Some("Full name is required"));
        assert_eq!(
            msg(check_full_name(" J ")).as_deref(),
            Some("Full name must be at least 2 characters")
        );
        assert_eq!(
            msg(check_full_name("Jo3")).as_deref(),
            Some("Full name can only contain letters and spaces")
        );
        assert!(check_full_name("Jo Smith").is_valid());
    }

    #[test]
    fn test_single_char_with_digit_reports_length() {
        assert_eq!(
            check_full_name("3").kind(),
            Some(ValidationErrorKind::TooShort)
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(check_email("  ").kind(), Some(ValidationErrorKind::Required));
        assert_eq!(
            msg(check_email("user@host")).as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(check_email("a b@c.d").is_invalid());
        assert!(check_email(" user@example.com ").is_valid());
    }

    #[test]
    fn test_password_rules_in_order() {
        let cases = [
            ("", "Password is required"),
            ("a", "Password must be at least 8 characters long"),
            ("abcdefgh", "Password must contain at least one uppercase letter"),
            ("ABCDEFGH", "Password must contain at least one lowercase letter"),
            ("Abcdefgh", "Password must contain at least one number"),
            ("Abcdefg1", "Password must contain at least one special character"),
        ];
        for (input, expected) in cases {
            assert_eq!(msg(check_password(input)).as_deref(), Some(expected), "{input}");
        }
        assert!(check_password("Abcdef1!").is_valid());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(check_password("Abcde1!").is_invalid());
        assert!(check_password("Abcdef1?").is_valid());
    }

    #[test]
    fn test_every_special_char_is_accepted() {
        for c in PASSWORD_SPECIAL_CHARS.chars() {
            let password = format!("Abcdef1{c}");
            assert!(check_password(&password).is_valid(), "{password}");
        }
        assert!(check_password("Abcdef1-").is_invalid());
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            msg(check_confirm_password("", "Abcdef1!")).as_deref(),
            Some("Please confirm your password")
        );
        let outcome = check_confirm_password("Abcdef1", "Abcdef1!");
        assert_eq!(outcome.kind(), Some(ValidationErrorKind::Mismatch));
        assert_eq!(outcome.message(), Some("Passwords do not match"));
        assert!(check_confirm_password("Abcdef1!", "Abcdef1!").is_valid());
    }

    #[test]
    fn test_age_boundaries() {
        assert!(check_age("13").is_valid());
        assert!(check_age("120").is_valid());
        assert_eq!(
            msg(check_age("12")).as_deref(),
            Some("You must be at least 13 years old")
        );
        assert_eq!(msg(check_age("121")).as_deref(), Some("Please enter a valid age"));
    }

    #[test]
    fn test_age_beyond_integer_range_is_out_of_range() {
        let outcome = check_age("99999999999999999999");
        assert_eq!(outcome.kind(), Some(ValidationErrorKind::OutOfRange));
        assert_eq!(outcome.message(), Some("Please enter a valid age"));

        let outcome = check_age("-99999999999999999999");
        assert_eq!(outcome.kind(), Some(ValidationErrorKind::OutOfRange));
        assert_eq!(outcome.message(), Some("You must be at least 13 years old"));
    }

    #[test]
    fn test_whitespace_password_is_checked_raw() {
        assert_eq!(
            msg(check_password("        ")).as_deref(),
            Some("Password must contain at least one uppercase letter")
        );
        assert_eq!(
            check_confirm_password("   ", "Abcdef1!").kind(),
            Some(ValidationErrorKind::Mismatch)
        );
    }

    #[test]
    fn test_age_parsing() {
        assert_eq!(check_age("").kind(), Some(ValidationErrorKind::Required));
        assert_eq!(check_age("abc").kind(), Some(ValidationErrorKind::NotANumber));
        assert_eq!(check_age("12.5").kind(), Some(ValidationErrorKind::NotANumber));
        assert_eq!(check_age("-4").kind(), Some(ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn test_phone_is_optional() {
        assert!(check_phone("").is_valid());
        assert!(check_phone("(555) 123-4567").is_valid());
        assert!(check_phone("+1 555 123 4567 890").is_valid());
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(check_phone("1234567890").is_valid());
        assert_eq!(
            msg(check_phone("123-456-789")).as_deref(),
            Some("Phone number must be at least 10 digits")
        );
        assert!(check_phone("123456789012345").is_valid());
        assert_eq!(
            msg(check_phone("1234567890123456")).as_deref(),
            Some("Phone number cannot exceed 15 digits")
        );
    }

    #[test]
    fn test_terms() {
        assert!(check_terms(true).is_valid());
        assert_eq!(
            msg(check_terms(false)).as_deref(),
            Some("You must accept the terms and conditions")
        );
    }
}
