//! Contact manager service.
//!
//! Gates inserts through field validation and exposes the stored contacts.

use crate::error::ValidationResult;
use crate::models::Contact;
use crate::repositories::{ContactRepository, InMemoryContactRepository};

/// In-memory address book.
///
/// Contacts are validated in a fixed order (first name, last name, phone
/// number) and appended to the repository only if every rule passes. A
/// rejected contact leaves the stored contacts untouched.
///
/// The manager holds no locks. Wrap it in a `Mutex` or `RwLock` to share it
/// between threads.
///
/// # Example
///
/// ```
/// use contact_manager::ContactManager;
///
/// let mut manager = ContactManager::new();
/// manager
///     .add_contact(Some("Maycon"), Some("Santos"), Some("5515987654321"))
///     .unwrap();
/// assert!(manager.add_contact(None, Some("Santos"), Some("5515987654321")).is_err());
/// assert_eq!(manager.get_all_contacts().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactManager<R = InMemoryContactRepository> {
    repository: R,
}

impl ContactManager {
    /// Create an empty manager backed by an in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_repository(InMemoryContactRepository::with_capacity(capacity))
    }
}

impl<R: ContactRepository> ContactManager<R> {
    /// Create a manager on top of an existing repository.
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Build a contact from raw values, validate it and store it.
    ///
    /// Any of the values may be absent; an absent value fails its rule the
    /// same way an invalid one does.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` hit, checking first name, then
    /// last name, then phone number. Nothing is stored in that case.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ValidationResult<()> {
        let contact = Contact::new(
            first_name.map(str::to_owned),
            last_name.map(str::to_owned),
            phone_number.map(str::to_owned),
        );
        self.add(contact)
    }

    /// Validate an already built contact and store it.
    ///
    /// # Errors
    ///
    /// Same as [`ContactManager::add_contact`].
    pub fn add(&mut self, contact: Contact) -> ValidationResult<()> {
        if let Err(e) = contact.validate() {
            tracing::debug!(
                first_name = ?contact.first_name(),
                reason = %e,
                "Contact rejected"
            );
            return Err(e);
        }

        tracing::debug!(first_name = ?contact.first_name(), "Contact stored");
        self.repository.insert(contact);
        Ok(())
    }

    /// All stored contacts, in the order they were added.
    pub fn get_all_contacts(&self) -> &[Contact] {
        self.repository.all()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Whether no contact has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Consume the manager and return its repository.
    pub fn into_repository(self) -> R {
        self.repository
    }
}
