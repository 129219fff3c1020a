//! Sample data shared by the integration tests.

use contact_manager::Contact;

pub const FIRST_NAME: &str = "Maycon";
pub const LAST_NAME: &str = "Santos";
pub const PHONE_NUMBER: &str = "5515987654321";

/// Phone numbers that satisfy both the length and country-code rules.
#[allow(dead_code)]
pub const VALID_PHONE_NUMBERS: [&str; 3] = ["5512987654321", "5512987654322", "5512987654323"];

/// Create a sample contact with every field present.
#[allow(dead_code)]
pub fn sample_contact(first_name: &str, last_name: &str, phone_number: &str) -> Contact {
    Contact::new(
        Some(first_name.to_string()),
        Some(last_name.to_string()),
        Some(phone_number.to_string()),
    )
}

/// Whether `contact` holds exactly the three given values.
#[allow(dead_code)]
pub fn matches(contact: &Contact, first_name: &str, last_name: &str, phone_number: &str) -> bool {
    contact.first_name() == Some(first_name)
        && contact.last_name() == Some(last_name)
        && contact.phone_number() == Some(phone_number)
}
