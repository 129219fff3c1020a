//! Contact Manager - an in-memory address book with field-level validation.
//!
//! Contacts carry a first name, a last name and a phone number. A contact is
//! only stored once every field passes its rule; otherwise the caller gets a
//! [`ValidationError`] and the address book is left unchanged.
//!
//! # Architecture
//!
//! - **domain**: Field rules (non-blank names, `55`-prefixed phone numbers)
//! - **models**: The `Contact` record
//! - **repositories**: Storage abstraction and the in-memory implementation
//! - **services**: `ContactManager`, which validates before storing
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::PhoneNumber;
pub use error::{ConfigError, ValidationError, ValidationResult};
pub use models::Contact;
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::ContactManager;
