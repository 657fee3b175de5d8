//! Pagination envelope returned by list operations.

use serde::{Deserialize, Serialize};

use crate::Contact;

/// A bounded, ordered slice of the collection plus counts for the whole of it.
///
/// `number` is zero-based; the HTTP layer accepts one-based page numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub content: Vec<Contact>,
    /// Requested page size
    pub size: u64,
    /// Zero-based page index
    pub number: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl Page {
    /// Build a page from the store's slice and total.
    ///
    /// `size` must be non-zero; the service rejects zero before calling.
    #[must_use]
    pub fn new(content: Vec<Contact>, number: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        let number_of_elements = content.len() as u64;
        Self {
            empty: content.is_empty(),
            content,
            size,
            number,
            total_elements,
            total_pages,
            number_of_elements,
            first: number == 0,
            last: number + 1 >= total_pages,
        }
    }
}
