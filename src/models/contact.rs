//! Contact model representing a single address-book entry.

use crate::domain::{require_name, NamePart, PhoneNumber};
use crate::error::ValidationResult;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A contact in the address book.
///
/// Fields are stored exactly as given; nothing is checked until one of the
/// `validate_*` methods runs. A field may be absent (`None`), in which case
/// its validator fails the same way it would for invalid content.
///
/// Two contacts are equal when their first names are equal, and they hash
/// the same way. Last name and phone number take no part in identity, so
/// "Maycon Santos" and "Maycon Silva" compare equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
}

impl Contact {
    /// Create a contact from raw field values without validating them.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    /// Fail if the first name is absent or blank.
    pub fn validate_first_name(&self) -> ValidationResult<()> {
        require_name(NamePart::First, self.first_name()).map(|_| ())
    }

    /// Fail if the last name is absent or blank.
    pub fn validate_last_name(&self) -> ValidationResult<()> {
        require_name(NamePart::Last, self.last_name()).map(|_| ())
    }

    /// Fail if the phone number is absent, not 13 characters long, or
    /// missing the `55` country code.
    pub fn validate_phone_number(&self) -> ValidationResult<()> {
        PhoneNumber::check(self.phone_number())
    }

    /// Run every field validator in order: first name, last name, phone
    /// number. Returns the first failure.
    pub fn validate(&self) -> ValidationResult<()> {
        self.validate_first_name()?;
        self.validate_last_name()?;
        self.validate_phone_number()
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
    }
}
