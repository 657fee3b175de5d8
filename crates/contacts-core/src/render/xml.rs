//! XML representation.
//!
//! A single contact is a `<contact>` document; lists are wrapped in
//! `<contactList>` with one `<contact>` child per record. Absent attributes
//! are omitted, `id` is always written.

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};

use crate::{Contact, ContactList, Error, Result};

const CONTACT: &str = "contact";
const CONTACT_LIST: &str = "contactList";

/// Render a single contact document.
pub fn render_contact(contact: &Contact) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;
    write_contact(&mut writer, contact)?;
    finish(writer)
}

/// Render a `<contactList>` document.
pub fn render_list(contacts: &[Contact]) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;
    write(&mut writer, Event::Start(BytesStart::new(CONTACT_LIST)))?;
    for contact in contacts {
        write_contact(&mut writer, contact)?;
    }
    write(&mut writer, Event::End(BytesEnd::new(CONTACT_LIST)))?;
    finish(writer)
}

/// Parse a `<contact>` request body.
///
/// The root element name is not checked; children map to fields by name and
/// unknown children are skipped. Text is kept exactly, surrounding
/// whitespace included.
pub fn parse_contact(body: &str) -> Result<Contact> {
    read_contacts(body, 1)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::ParseError("Invalid XML body: no root element".to_string()))
}

/// Parse a `<contactList>` document.
pub fn parse_list(body: &str) -> Result<ContactList> {
    read_contacts(body, 2).map(ContactList::from)
}

/// Collect every element at `contact_depth` as a contact, reading its
/// children as fields.
fn read_contacts(body: &str, contact_depth: usize) -> Result<Vec<Contact>> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(false);

    let field_depth = contact_depth + 1;
    let mut depth = 0;
    let mut contacts = Vec::new();
    let mut current: Option<Contact> = None;
    let mut field: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(start) => {
                depth += 1;
                if depth == contact_depth {
                    current = Some(Contact::default());
                } else if depth == field_depth {
                    field = Some((element_name(start.local_name().as_ref())?, String::new()));
                }
            }
            Event::Empty(empty) => {
                if depth + 1 == contact_depth {
                    contacts.push(Contact::default());
                } else if depth + 1 == field_depth {
                    if let Some(contact) = current.as_mut() {
                        set_field(
                            contact,
                            &element_name(empty.local_name().as_ref())?,
                            String::new(),
                        );
                    }
                }
            }
            Event::Text(text) if depth == field_depth => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&text.unescape().map_err(parse_error)?);
                }
            }
            Event::CData(cdata) if depth == field_depth => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(std::str::from_utf8(&cdata).map_err(parse_error)?);
                }
            }
            Event::End(_) => {
                if depth == field_depth {
                    if let (Some(contact), Some((name, value))) = (current.as_mut(), field.take()) {
                        set_field(contact, &name, value);
                    }
                } else if depth == contact_depth {
                    contacts.extend(current.take());
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(Error::ParseError(
            "Invalid XML body: unexpected end of document".to_string(),
        ));
    }
    Ok(contacts)
}

fn set_field(contact: &mut Contact, name: &str, value: String) {
    let slot = match name {
        "id" => {
            contact.id = value;
            return;
        }
        "firstname" => &mut contact.firstname,
        "lastname" => &mut contact.lastname,
        "gender" => &mut contact.gender,
        "email" => &mut contact.email,
        "phone" => &mut contact.phone,
        "address" => &mut contact.address,
        "city" => &mut contact.city,
        "state" => &mut contact.state,
        "country" => &mut contact.country,
        "pincode" => &mut contact.pincode,
        "picture" => &mut contact.picture,
        _ => return,
    };
    *slot = Some(value);
}

fn element_name(raw: &[u8]) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(parse_error)
}

fn parse_error(e: impl std::fmt::Display) -> Error {
    Error::ParseError(format!("Invalid XML body: {e}"))
}

fn write_declaration(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    write(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )
}

fn write_contact(writer: &mut Writer<Vec<u8>>, contact: &Contact) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(CONTACT)))?;
    write_field(writer, "id", &contact.id)?;
    for (name, value) in contact.attributes() {
        if let Some(value) = value {
            write_field(writer, name, value)?;
        }
    }
    write(writer, Event::End(BytesEnd::new(CONTACT)))
}

fn write_field(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(value)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::SerializationError(format!("Failed to write XML: {e}")))
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::SerializationError(format!("XML output is not UTF-8: {e}")))
}
