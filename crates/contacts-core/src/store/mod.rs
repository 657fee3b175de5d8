//! Contact Store - abstraction boundary for contact persistence.
//!
//! The service depends on the `ContactStore` trait only, so the backing
//! store can be swapped (SQLite in production, in-memory for tests) without
//! touching the CRUD or negotiation logic.

mod memory;
mod sqlite;

pub use memory::MemoryContactStore;
pub use sqlite::SqliteContactStore;

use crate::{Contact, Result};

/// Persistence operations the contact service relies on.
///
/// # Ordering
///
/// `list_page` returns records in a stable order (insertion order for both
/// bundled implementations). Results are only stable while the collection
/// is not being mutated concurrently.
///
/// # Concurrency
///
/// Implementations serialize their own writes; the last write to a given id
/// wins.
#[async_trait::async_trait]
pub trait ContactStore: Send + Sync {
    /// Return up to `limit` contacts starting at `offset`, plus the total count.
    async fn list_page(&self, offset: u64, limit: u64) -> Result<(Vec<Contact>, u64)>;

    /// Look a contact up by id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Contact>>;

    /// Insert the contact, or replace every field of the existing record with the same id.
    async fn save(&self, contact: &Contact) -> Result<Contact>;

    /// Whether a record with this id exists.
    async fn exists_by_id(&self, id: &str) -> Result<bool>;

    /// Remove a record. Returns `false` when there was nothing to remove.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<u64>;
}
