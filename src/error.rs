//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised when a contact field fails its validation rule.
///
/// This is the only error a caller of [`crate::ContactManager::add_contact`]
/// ever sees. A missing field and a field with invalid content produce the
/// same variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// First name is absent, empty or whitespace-only
    #[error("First Name cannot be null or empty")]
    BlankFirstName,

    /// Last name is absent, empty or whitespace-only
    #[error("Last Name cannot be null or empty")]
    BlankLastName,

    /// Phone number is absent or not exactly 13 characters long
    #[error("Phone number should be 13 digits long")]
    PhoneNumberLength,

    /// Phone number does not start with the `55` country code
    #[error("PhoneNumber should start with 55 that is a country code")]
    MissingCountryCode,
}

impl ValidationError {
    /// Human-readable description of the rule that failed.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
