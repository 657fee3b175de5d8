//! Plain-text representation: one labelled block per contact.

use std::fmt::Write;

use crate::Contact;

/// Line closing every block, including the last one.
pub const SEPARATOR: &str = "------------------------------------------";

/// Placeholder printed for an absent attribute.
pub const ABSENT: &str = "null";

/// Render contacts as concatenated text blocks.
///
/// Absent attributes print as [`ABSENT`].
pub fn render(contacts: &[Contact]) -> String {
    let mut out = String::new();
    // Writing into a String does not fail.
    if contacts
        .iter()
        .try_for_each(|contact| write_block(&mut out, contact))
        .is_err()
    {
        tracing::warn!("Text rendering stopped early");
    }
    out
}

fn write_block(out: &mut impl Write, c: &Contact) -> std::fmt::Result {
    fn v(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or(ABSENT)
    }

    writeln!(out, "ID: {}", c.id)?;
    writeln!(out, "Name: {} {}", v(&c.firstname), v(&c.lastname))?;
    writeln!(out, "Gender: {}", v(&c.gender))?;
    writeln!(out, "Email: {}", v(&c.email))?;
    writeln!(out, "Phone: {}", v(&c.phone))?;
    writeln!(out, "Address: {}", v(&c.address))?;
    writeln!(out, "City: {}", v(&c.city))?;
    writeln!(out, "State: {}", v(&c.state))?;
    writeln!(out, "Country: {}", v(&c.country))?;
    writeln!(out, "Pincode: {}", v(&c.pincode))?;
    writeln!(out, "Picture: {}", v(&c.picture))?;
    writeln!(out, "{SEPARATOR}")
}
