//! Contacts-core - the contact resource and its representations
//!
//! This crate provides:
//! - The `Contact` record and its transient wrappers
//! - Content negotiation between JSON, XML, CSV and text
//! - One serializer per representation
//! - The `ContactStore` boundary with `SQLite` and in-memory stores
//! - `ContactService`, the CRUD orchestration used by the HTTP layer

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod contact;
pub mod error;
pub mod format;
pub mod page;
pub mod render;
pub mod service;
pub mod store;

pub use contact::{Contact, ContactList, ErrorInfo};
pub use error::{Error, Result};
pub use format::Format;
pub use page::Page;
pub use service::ContactService;
pub use store::{ContactStore, MemoryContactStore, SqliteContactStore};
