//! Name field rules.

use crate::error::{ValidationError, ValidationResult};

/// Which half of a contact's name is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
}

impl NamePart {
    fn blank_error(self) -> ValidationError {
        match self {
            Self::First => ValidationError::BlankFirstName,
            Self::Last => ValidationError::BlankLastName,
        }
    }
}

/// Returns true if `value` is empty or made only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Require a name to be present and non-blank.
///
/// # Errors
///
/// Returns the blank-name variant for `part` when `value` is `None`, empty
/// or whitespace-only.
///
/// # Example
///
/// ```
/// use contact_manager::domain::{require_name, NamePart};
/// use contact_manager::ValidationError;
///
/// assert_eq!(require_name(NamePart::First, Some("Maycon")), Ok("Maycon"));
/// assert_eq!(
///     require_name(NamePart::Last, Some("  ")),
///     Err(ValidationError::BlankLastName)
/// );
/// ```
pub fn require_name(part: NamePart, value: Option<&str>) -> ValidationResult<&str> {
    match value {
        Some(name) if !is_blank(name) => Ok(name),
        _ => Err(part.blank_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n\r"));
        assert!(is_blank("\u{2003}"));
        assert!(!is_blank("Maycon"));
        assert!(!is_blank("  a  "));
    }

    #[test]
    fn test_require_name_accepts_padded_value_verbatim() {
        assert_eq!(require_name(NamePart::First, Some(" Ana ")), Ok(" Ana "));
    }

    #[test]
    fn test_require_name_missing() {
        assert_eq!(
            require_name(NamePart::First, None),
            Err(ValidationError::BlankFirstName)
        );
        assert_eq!(
            require_name(NamePart::Last, None),
            Err(ValidationError::BlankLastName)
        );
    }

    #[test]
    fn test_require_name_blank() {
        assert_eq!(
            require_name(NamePart::First, Some("")),
            Err(ValidationError::BlankFirstName)
        );
        assert_eq!(
            require_name(NamePart::Last, Some(" \t ")),
            Err(ValidationError::BlankLastName)
        );
    }
}
