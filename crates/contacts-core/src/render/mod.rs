//! Serializers for each response representation.
//!
//! Each format has its own module with explicit field-by-field code. The
//! functions here dispatch on [`Format`] for the two shapes the endpoints
//! return: a single contact and a page of contacts.

pub mod csv;
pub mod json;
pub mod text;
pub mod xml;

use crate::{Contact, Format, Page, Result};

/// Render one contact in the given format.
///
/// CSV and text emit a single-row document.
pub fn render_contact(format: Format, contact: &Contact) -> Result<String> {
    match format {
        Format::Json => json::render(contact),
        Format::Xml => xml::render_contact(contact),
        Format::Csv => Ok(csv::render(std::slice::from_ref(contact))),
        Format::Text => Ok(text::render(std::slice::from_ref(contact))),
    }
}

/// Render a page of contacts.
///
/// Only JSON keeps the paging envelope; the other formats carry the records.
pub fn render_page(format: Format, page: &Page) -> Result<String> {
    match format {
        Format::Json => json::render(page),
        Format::Xml => xml::render_list(&page.content),
        Format::Csv => Ok(csv::render(&page.content)),
        Format::Text => Ok(text::render(&page.content)),
    }
}
