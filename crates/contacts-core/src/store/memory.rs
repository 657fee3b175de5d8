//! In-memory contact store.

use im::Vector;
use tokio::sync::RwLock;

use super::ContactStore;
use crate::{Contact, Result};

/// Contact store held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<Vector<Contact>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ContactStore for MemoryContactStore {
    async fn list_page(&self, offset: u64, limit: u64) -> Result<(Vec<Contact>, u64)> {
        let contacts = self.contacts.read().await;
        let offset = usize::try_from(offset).map_or(usize::MAX, |v| v);
        let limit = usize::try_from(limit).map_or(usize::MAX, |v| v);
        let items = contacts.iter().skip(offset).take(limit).cloned().collect();
        Ok((items, contacts.len() as u64))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self
            .contacts
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn save(&self, contact: &Contact) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        match contacts.iter().position(|c| c.id == contact.id) {
            Some(index) => {
                contacts.set(index, contact.clone());
            }
            None => contacts.push_back(contact.clone()),
        }
        Ok(contact.clone())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.contacts.read().await.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut contacts = self.contacts.write().await;
        Ok(contacts
            .iter()
            .position(|c| c.id == id)
            .map(|index| contacts.remove(index))
            .is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.contacts.read().await.len() as u64)
    }
}
