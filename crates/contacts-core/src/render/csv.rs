//! CSV representation.
//!
//! One header row, one row per contact, CRLF terminated, minimal quoting.

use crate::{Contact, Error, Result};

/// Header row, in column order.
pub const HEADERS: [&str; 12] = [
    "ID",
    "First Name",
    "Last Name",
    "Gender",
    "Email",
    "Phone",
    "Address",
    "City",
    "State",
    "Country",
    "Pincode",
    "Picture",
];

/// Render contacts as a CSV document.
///
/// A failure while writing does not fail the request: the returned body is
/// the error message instead.
pub fn render(contacts: &[Contact]) -> String {
    try_render(contacts).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "CSV generation failed, returning error text");
        format!("Error generating CSV: {e}")
    })
}

/// Render contacts as CSV, surfacing write failures.
pub fn try_render(contacts: &[Contact]) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(HEADERS).map_err(write_error)?;
    for contact in contacts {
        let row = std::iter::once(contact.id.as_str())
            .chain(contact.attributes().into_iter().map(|(_, v)| v.unwrap_or("")));
        writer.write_record(row).map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Parse a document produced by [`render`] back into contacts.
///
/// Empty cells become absent attributes.
pub fn parse(body: &str) -> Result<Vec<Contact>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::ParseError(format!("Invalid CSV header: {e}")))?;
    if headers.iter().ne(HEADERS) {
        return Err(Error::ParseError(format!(
            "Unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| Error::ParseError(format!("Invalid CSV row: {e}")))?;
            let cell = |i: usize| {
                record
                    .get(i)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            Ok(Contact {
                id: record.get(0).unwrap_or_default().to_string(),
                firstname: cell(1),
                lastname: cell(2),
                gender: cell(3),
                email: cell(4),
                phone: cell(5),
                address: cell(6),
                city: cell(7),
                state: cell(8),
                country: cell(9),
                pincode: cell(10),
                picture: cell(11),
            })
        })
        .collect()
}

fn write_error(e: ::csv::Error) -> Error {
    Error::SerializationError(e.to_string())
}
