use crate::models::Contact;

/// Storage for contacts that have passed validation.
///
/// Provides abstraction over where accepted contacts live, enabling
/// different implementations (in-memory, mock). Implementations only ever
/// grow: there is no update or delete.
///
/// Implementations are not required to be thread-safe. Callers sharing a
/// repository across threads must wrap it in their own lock.
pub trait ContactRepository {
    /// Append a contact after any previously stored ones.
    fn insert(&mut self, contact: Contact);

    /// All stored contacts, oldest first.
    fn all(&self) -> &[Contact];

    /// Number of stored contacts.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
