//! Contact record and the transient wrappers built around it per response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted contact.
///
/// `id` is assigned by the service when blank. Every other attribute is
/// optional free text with no cross-field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "contact")]
pub struct Contact {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub id: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
    pub picture: Option<String>,
}

/// `null` and a missing value both mean "no id yet".
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Contact {
    /// Create an empty contact with the given id
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Whether the id is missing and must be generated
    #[must_use]
    pub fn has_blank_id(&self) -> bool {
        self.id.trim().is_empty()
    }

    /// Attribute values in column order, excluding `id`.
    ///
    /// Shared by the CSV writer and the SQLite binder so both agree on order.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, Option<&str>); 11] {
        [
            ("firstname", self.firstname.as_deref()),
            ("lastname", self.lastname.as_deref()),
            ("gender", self.gender.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
            ("city", self.city.as_deref()),
            ("state", self.state.as_deref()),
            ("country", self.country.as_deref()),
            ("pincode", self.pincode.as_deref()),
            ("picture", self.picture.as_deref()),
        ]
    }
}

/// Ordered contacts wrapped under a single XML root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "contactList")]
pub struct ContactList {
    #[serde(rename = "contact", default)]
    pub contacts: Vec<Contact>,
}

impl ContactList {
    #[must_use]
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl From<Vec<Contact>> for ContactList {
    fn from(contacts: Vec<Contact>) -> Self {
        Self::new(contacts)
    }
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    /// When the error was constructed
    pub timestamp: DateTime<Utc>,
}

impl ErrorInfo {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
