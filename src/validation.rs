//! Field validation rules
//!
//! Rules are pure: they look at a field identifier, its required flag and its
//! trimmed value. Annotating the field with the outcome is the caller's job.

use crate::state::FieldId;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Optional leading `+`, then at least ten digits, spaces, hyphens or parentheses
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

/// Minimum length of a non-empty name
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum length of a non-empty address
pub const ADDRESS_MIN_CHARS: usize = 10;
/// Minimum length of a non-empty problem description
pub const PROBLEM_MIN_CHARS: usize = 10;

/// Why a field is invalid. The display text is what the user sees next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Это поле обязательно для заполнения")]
    RequiredEmpty,
    #[error("Введите корректный номер телефона")]
    InvalidPhone,
    #[error("Имя должно содержать минимум 2 символа")]
    NameTooShort,
    #[error("Укажите полный адрес")]
    AddressTooShort,
    #[error("Опишите проблему более подробно")]
    ProblemTooShort,
}

/// Check a phone string against the permissive phone pattern
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Validate one field value.
///
/// The value is trimmed first. Identifier-specific rules only run for
/// non-empty values, so an empty optional field is always valid.
pub fn validate_value(id: FieldId, required: bool, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Err(ValidationError::RequiredEmpty)
        } else {
            Ok(())
        };
    }

    let chars = value.chars().count();
    match id {
        FieldId::Phone if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        FieldId::Name if chars < NAME_MIN_CHARS => Err(ValidationError::NameTooShort),
        FieldId::Address if chars < ADDRESS_MIN_CHARS => Err(ValidationError::AddressTooShort),
        FieldId::Problem if chars < PROBLEM_MIN_CHARS => Err(ValidationError::ProblemTooShort),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required {
        use super::*;

        #[test]
        fn test_empty_required_fields_are_invalid() {
            for id in FieldId::ALL.iter().filter(|id| id.is_required()) {
                assert_eq!(
                    validate_value(*id, true, ""),
                    Err(ValidationError::RequiredEmpty),
                    "{id} should reject an empty value"
                );
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            assert_eq!(
                validate_value(FieldId::Address, true, "   \t "),
                Err(ValidationError::RequiredEmpty)
            );
        }

        #[test]
        fn test_empty_optional_field_is_valid() {
            assert_eq!(validate_value(FieldId::Comments, false, ""), Ok(()));
        }

        #[test]
        fn test_empty_not_required_skips_specific_rule() {
            // A phone field that is not required accepts an empty value
            assert_eq!(validate_value(FieldId::Phone, false, "  "), Ok(()));
        }

        #[test]
        fn test_required_message() {
            assert_eq!(
                ValidationError::RequiredEmpty.to_string(),
                "Это поле обязательно для заполнения"
            );
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_formatted_number_is_valid() {
            assert!(is_valid_phone("+7 (999) 123-45-67"));
            assert_eq!(validate_value(FieldId::Phone, true, "+7 (999) 123-45-67"), Ok(()));
        }

        #[test]
        fn test_short_number_is_invalid() {
            assert!(!is_valid_phone("12345"));
            assert_eq!(
                validate_value(FieldId::Phone, true, "12345"),
                Err(ValidationError::InvalidPhone)
            );
        }

        #[test]
        fn test_ten_digits_without_plus() {
            assert!(is_valid_phone("9991234567"));
        }

        #[test]
        fn test_letters_rejected() {
            assert!(!is_valid_phone("+7 999 CALL-ME-NOW"));
        }

        #[test]
        fn test_plus_only_at_start() {
            assert!(!is_valid_phone("7999+1234567"));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(validate_value(FieldId::Phone, true, "  89991234567  "), Ok(()));
        }
    }

    mod lengths {
        use super::*;

        #[test]
        fn test_name_min_length() {
            assert_eq!(
                validate_value(FieldId::Name, true, "А"),
                Err(ValidationError::NameTooShort)
            );
            assert_eq!(validate_value(FieldId::Name, true, "Ян"), Ok(()));
        }

        #[test]
        fn test_address_min_length_counts_chars_not_bytes() {
            // Nine Cyrillic letters are eighteen bytes but still too short
            assert_eq!(
                validate_value(FieldId::Address, true, "ул Ленина"),
                Err(ValidationError::AddressTooShort)
            );
            assert_eq!(validate_value(FieldId::Address, true, "ул Ленина, 1"), Ok(()));
        }

        #[test]
        fn test_problem_min_length() {
            assert_eq!(
                validate_value(FieldId::Problem, true, "хромает"),
                Err(ValidationError::ProblemTooShort)
            );
            assert_eq!(
                validate_value(FieldId::Problem, true, "кот хромает на лапу"),
                Ok(())
            );
        }

        #[test]
        fn test_optional_fields_have_no_rule() {
            assert_eq!(validate_value(FieldId::PetAge, false, "1"), Ok(()));
            assert_eq!(validate_value(FieldId::PetName, false, "X"), Ok(()));
        }
    }
}
