//! PhoneNumber value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country code every stored phone number must start with.
pub const COUNTRY_CODE: &str = "55";

/// Exact length of a phone number, in characters, country code included.
pub const PHONE_NUMBER_LENGTH: usize = 13;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// Only the length and the country code are checked; the remaining
/// characters are not required to be digits.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5515987654321").unwrap();
/// assert_eq!(phone.country_code(), "55");
/// assert_eq!(phone.national_number(), "15987654321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// See [`PhoneNumber::check`].
    pub fn new(phone: impl Into<String>) -> ValidationResult<Self> {
        let phone = phone.into();
        Self::check(Some(&phone))?;
        Ok(Self(phone))
    }

    /// Check a raw phone number without taking ownership of it.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly [`PHONE_NUMBER_LENGTH`] characters long
    /// - Must start with [`COUNTRY_CODE`]
    ///
    /// The rules are applied in that order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNumberLength` if the number is absent or
    /// has the wrong length, and `ValidationError::MissingCountryCode` if it
    /// does not start with the country code.
    pub fn check(phone: Option<&str>) -> ValidationResult<()> {
        let phone = phone.ok_or(ValidationError::PhoneNumberLength)?;

        if phone.chars().count() != PHONE_NUMBER_LENGTH {
            return Err(ValidationError::PhoneNumberLength);
        }

        if !phone.starts_with(COUNTRY_CODE) {
            return Err(ValidationError::MissingCountryCode);
        }

        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The leading country code.
    pub fn country_code(&self) -> &str {
        &self.0[..COUNTRY_CODE.len()]
    }

    /// Everything after the country code.
    pub fn national_number(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
