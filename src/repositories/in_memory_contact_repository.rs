use super::traits::ContactRepository;
use crate::models::Contact;

/// Contact repository backed by a `Vec`, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with room for `capacity` contacts before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity),
        }
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    fn all(&self) -> &[Contact] {
        &self.contacts
    }
}
