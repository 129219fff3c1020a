//! Application service layer.
//!
//! Services contain business logic and sit between callers and the
//! repositories: every contact passes validation here before it is stored.

mod contact_manager;

pub use contact_manager::ContactManager;
