//! Data models for the address book.
//!
//! This module contains the contact record stored by the manager.

pub mod contact;

pub use contact::Contact;
