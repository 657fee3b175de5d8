//! Contact service: CRUD orchestration over a [`ContactStore`].
//!
//! Handles id assignment on create, existence checks before update, and the
//! one-based to zero-based page translation.

use std::sync::Arc;

use uuid::Uuid;

use crate::{store::ContactStore, Contact, Error, Page, Result};

/// CRUD operations for contacts.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService").finish_non_exhaustive()
    }
}

impl ContactService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// List one page of contacts.
    ///
    /// `page` is one-based; anything below 1 reads the first page.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageRequest` when `limit` is below 1.
    pub async fn list(&self, page: i64, limit: i64) -> Result<Page> {
        let size = u64::try_from(limit)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                Error::InvalidPageRequest(format!("Page size must not be less than one, got {limit}"))
            })?;
        let index = u64::try_from(page.saturating_sub(1)).unwrap_or(0);

        let (content, total) = self
            .store
            .list_page(index.saturating_mul(size), size)
            .await?;
        tracing::debug!(page = index, size, total, "Listed contacts");

        Ok(Page::new(content, index, size, total))
    }

    pub async fn get(&self, id: &str) -> Result<Option<Contact>> {
        self.store.get_by_id(id).await
    }

    /// Persist a new contact, generating an id when the supplied one is blank.
    ///
    /// A caller-supplied id is stored as-is; saving over an existing id
    /// replaces that record.
    pub async fn create(&self, mut contact: Contact) -> Result<Contact> {
        if contact.has_blank_id() {
            contact.id = Uuid::new_v4().to_string();
        }
        let saved = self.store.save(&contact).await?;
        tracing::info!(id = %saved.id, "Created contact");
        Ok(saved)
    }

    /// Replace every field of an existing contact.
    ///
    /// The path id wins over any id in the body. Returns `None`, without
    /// creating anything, when no record has this id.
    pub async fn update(&self, id: &str, contact: Contact) -> Result<Option<Contact>> {
        if !self.store.exists_by_id(id).await? {
            tracing::debug!(id, "Update target not found");
            return Ok(None);
        }

        let contact = Contact {
            id: id.to_string(),
            ..contact
        };
        let saved = self.store.save(&contact).await?;
        tracing::info!(id, "Updated contact");
        Ok(Some(saved))
    }

    /// Delete a contact. Returns `false` when no record has this id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted {
            tracing::info!(id, "Deleted contact");
        }
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64> {
        self.store.count().await
    }
}
