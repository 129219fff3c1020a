//! Domain value objects and field rules.
//!
//! This module contains the rules a contact's fields must satisfy before the
//! contact can be stored: non-blank names and a phone number carrying the
//! `55` country code.

pub mod name;
pub mod phone;

pub use name::{is_blank, require_name, NamePart};
pub use phone::{PhoneNumber, COUNTRY_CODE, PHONE_NUMBER_LENGTH};
