//! Round-trip properties: a stored contact rendered in JSON, XML or CSV and
//! parsed back keeps every field value.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use contacts_core::{render, Contact, Format, Page};
use proptest::prelude::*;

/// Free text including delimiter, quote and markup characters, with
/// leading, trailing and whitespace-only values.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 @.,&<>'\"/:-]{1,20}"
}

fn field() -> impl Strategy<Value = Option<String>> {
    prop::option::of(text())
}

prop_compose! {
    fn contact()(
        id in "[a-f0-9]{8}-[a-f0-9]{4}",
        names in (field(), field(), field()),
        reach in (field(), field(), field()),
        place in (field(), field(), field()),
        rest in (field(), field()),
    ) -> Contact {
        Contact {
            id,
            firstname: names.0,
            lastname: names.1,
            gender: names.2,
            email: reach.0,
            phone: reach.1,
            address: reach.2,
            city: place.0,
            state: place.1,
            country: place.2,
            pincode: rest.0,
            picture: rest.1,
        }
    }
}

proptest! {
    #[test]
    fn json_round_trip(c in contact()) {
        let body = render::render_contact(Format::Json, &c).expect("render");
        let parsed: Contact = render::json::parse(&body).expect("parse");
        prop_assert_eq!(parsed, c);
    }

    #[test]
    fn xml_round_trip(c in contact()) {
        let body = render::render_contact(Format::Xml, &c).expect("render");
        let parsed = render::xml::parse_contact(&body).expect("parse");
        prop_assert_eq!(parsed, c);
    }

    #[test]
    fn csv_round_trip(c in contact()) {
        let body = render::render_contact(Format::Csv, &c).expect("render");
        let parsed = render::csv::parse(&body).expect("parse");
        prop_assert_eq!(parsed, vec![c]);
    }

    #[test]
    fn xml_list_round_trip(contacts in prop::collection::vec(contact(), 0..5)) {
        let page = Page::new(contacts.clone(), 0, 10, contacts.len() as u64);
        let body = render::render_page(Format::Xml, &page).expect("render");
        let parsed = render::xml::parse_list(&body).expect("parse");
        prop_assert_eq!(parsed.contacts, contacts);
    }

    #[test]
    fn csv_list_has_one_row_per_contact(contacts in prop::collection::vec(contact(), 0..5)) {
        let page = Page::new(contacts.clone(), 0, 10, contacts.len() as u64);
        let body = render::render_page(Format::Csv, &page).expect("render");
        prop_assert!(body.starts_with("ID,First Name,Last Name,"));
        prop_assert_eq!(render::csv::parse(&body).expect("parse"), contacts);
    }

    #[test]
    fn text_has_one_block_per_contact(contacts in prop::collection::vec(contact(), 0..5)) {
        let page = Page::new(contacts.clone(), 0, 10, contacts.len() as u64);
        let body = render::render_page(Format::Text, &page).expect("render");
        prop_assert_eq!(body.matches(render::text::SEPARATOR).count(), contacts.len());
        for c in &contacts {
            let id_line = format!("ID: {}\n", c.id);
            prop_assert!(body.contains(&id_line));
        }
    }
}
