//! Response representations and content negotiation.
//!
//! # Precedence
//!
//! 1. The `format` query parameter, when it names a known format
//! 2. The `Accept` header, by substring, checked xml then csv then text
//! 3. JSON
//!
//! An unknown `format` value is not an error. It falls through to the header
//! and then the default, so `?format=yaml` with `Accept: text/csv` yields CSV.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Representation chosen for a response body.
///
/// Parsing accepts the `format` query parameter values, case-insensitively:
///
/// ```
/// use contacts_core::Format;
///
/// assert_eq!("TXT".parse::<Format>().ok(), Some(Format::Text));
/// assert!("yaml".parse::<Format>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Format {
    #[default]
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "xml")]
    Xml,
    #[strum(serialize = "csv")]
    Csv,
    #[strum(serialize = "text", serialize = "txt")]
    Text,
}

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";
pub const TEXT_CSV: &str = "text/csv";
pub const TEXT_PLAIN: &str = "text/plain";

impl Format {
    /// MIME type sent as the response `Content-Type`
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => APPLICATION_JSON,
            Self::Xml => APPLICATION_XML,
            Self::Csv => TEXT_CSV,
            Self::Text => TEXT_PLAIN,
        }
    }

    /// Format used by write endpoints, which only answer in JSON or XML.
    #[must_use]
    pub const fn for_write(self) -> Self {
        match self {
            Self::Xml => Self::Xml,
            Self::Json | Self::Csv | Self::Text => Self::Json,
        }
    }

    /// Resolve the response format from the request's hints.
    ///
    /// See the module docs for the precedence rules.
    #[must_use]
    pub fn resolve(accept: Option<&str>, format: Option<&str>) -> Self {
        format
            .and_then(|value| Self::from_str(value).ok())
            .or_else(|| accept.and_then(Self::from_accept))
            .unwrap_or_default()
    }

    /// Substring match over the raw header, first hit in priority order.
    fn from_accept(accept: &str) -> Option<Self> {
        [Self::Xml, Self::Csv, Self::Text]
            .into_iter()
            .find(|candidate| accept.contains(candidate.content_type()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_wins_over_header() {
        assert_eq!(Format::resolve(Some("text/csv"), Some("xml")), Format::Xml);
    }

    #[test]
    fn test_param_is_case_insensitive() {
        assert_eq!(Format::resolve(None, Some("CSV")), Format::Csv);
        assert_eq!(Format::resolve(None, Some("Json")), Format::Json);
        assert_eq!(Format::resolve(None, Some("TEXT")), Format::Text);
        assert_eq!(Format::resolve(None, Some("txt")), Format::Text);
    }

    #[test]
    fn test_json_param_beats_xml_header() {
        assert_eq!(
            Format::resolve(Some("application/xml"), Some("json")),
            Format::Json
        );
    }

    #[test]
    fn test_header_priority_xml_first() {
        assert_eq!(
            Format::resolve(Some("application/xml, text/csv"), None),
            Format::Xml
        );
        assert_eq!(
            Format::resolve(Some("text/csv, application/xml"), None),
            Format::Xml
        );
    }

    #[test]
    fn test_header_priority_csv_before_text() {
        assert_eq!(
            Format::resolve(Some("text/plain;q=0.9, text/csv"), None),
            Format::Csv
        );
        assert_eq!(Format::resolve(Some("text/plain"), None), Format::Text);
    }

    #[test]
    fn test_header_is_substring_match() {
        assert_eq!(
            Format::resolve(Some("application/xml;charset=UTF-8"), None),
            Format::Xml
        );
    }

    #[test]
    fn test_defaults_to_json() {
        assert_eq!(Format::resolve(None, None), Format::Json);
        assert_eq!(Format::resolve(Some("*/*"), None), Format::Json);
        assert_eq!(Format::resolve(Some("application/json"), None), Format::Json);
    }

    #[test]
    fn test_unknown_param_falls_through_to_header() {
        // Known quirk: an unrecognized format is ignored rather than rejected.
        assert_eq!(Format::resolve(Some("text/csv"), Some("yaml")), Format::Csv);
        assert_eq!(Format::resolve(None, Some("yaml")), Format::Json);
        assert_eq!(Format::resolve(Some("text/plain"), Some("")), Format::Text);
    }

    #[test]
    fn test_for_write_collapses_to_json_or_xml() {
        assert_eq!(Format::Xml.for_write(), Format::Xml);
        assert_eq!(Format::Csv.for_write(), Format::Json);
        assert_eq!(Format::Text.for_write(), Format::Json);
        assert_eq!(Format::Json.for_write(), Format::Json);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(Format::Json.content_type(), "application/json");
        assert_eq!(Format::Xml.content_type(), "application/xml");
        assert_eq!(Format::Csv.content_type(), "text/csv");
        assert_eq!(Format::Text.content_type(), "text/plain");
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Text.to_string(), "text");
    }
}
