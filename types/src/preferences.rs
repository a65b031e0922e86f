//! Preference fields, the option catalog and the save wire payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text;

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three required selections on the form.
///
/// Declaration order is validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceField {
    Language,
    Region,
    TimeZone,
}

impl PreferenceField {
    /// All fields in validation order.
    pub fn all() -> &'static [PreferenceField] {
        &[Self::Language, Self::Region, Self::TimeZone]
    }

    /// Control label shown next to the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Language => text::LANGUAGE_LABEL,
            Self::Region => text::REGION_LABEL,
            Self::TimeZone => text::TIME_ZONE_LABEL,
        }
    }

    /// Message shown when this field is unset at save time.
    pub fn error_message(self) -> String {
        text::field_error_message(self.label())
    }

    /// Stable key used for DOM ids and config lookups.
    pub fn key(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Region => "region",
            Self::TimeZone => "time_zone",
        }
    }
}

impl fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names none of the preference fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preference field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for PreferenceField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "language" | "lang" => Ok(Self::Language),
            "region" => Ok(Self::Region),
            "time-zone" | "timezone" | "time_zone" | "tz" => Ok(Self::TimeZone),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered, pre-localized option labels for each field.
///
/// The form treats labels as opaque strings and never reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOptions {
    pub languages: Vec<String>,
    pub regions: Vec<String>,
    pub time_zones: Vec<String>,
}

impl PreferenceOptions {
    pub fn new(languages: Vec<String>, regions: Vec<String>, time_zones: Vec<String>) -> Self {
        Self {
            languages,
            regions,
            time_zones,
        }
    }

    /// Options for a single field, in display order.
    pub fn for_field(&self, field: PreferenceField) -> &[String] {
        match field {
            PreferenceField::Language => &self.languages,
            PreferenceField::Region => &self.regions,
            PreferenceField::TimeZone => &self.time_zones,
        }
    }

    /// Whether `value` is one of the options offered for `field`.
    pub fn contains(&self, field: PreferenceField, value: &str) -> bool {
        self.for_field(field).iter().any(|opt| opt == value)
    }
}

impl Default for PreferenceOptions {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }

        Self {
            languages: owned(&[
                "Italiano(Italian)",
                "Español (Spanish)",
                "Français (French)",
                "Deutsch (German)",
                "English",
                "日本語 (Japanese)",
                "한국어 (Korean)",
                "Русский (Russian)",
                "العربية (Arabic)",
            ]),
            regions: owned(&[
                "France",
                "Canada",
                "United Kingdom",
                "Germany",
                "United States",
                "Japan",
                "South Korea",
                "Russia",
                "United Arab Emirates",
            ]),
            time_zones: owned(&[
                "(UTC-08:00) Pacific",
                "(UTC-07:00) Mountain",
                "(UTC-06:00) Central",
                "(UTC-05:00) Eastern",
                "(UTC-04:00) Atlantic",
                "(UTC+00:00) Co-ord",
                "(UTC+08:00) Beijing",
            ]),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the outbound save request. Only built once all fields are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub language: String,
    pub region: String,
    pub time_zone: String,
}

/// Body returned by the save endpoint, on success and on failure alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl SaveResponse {
    /// The server message, ignoring blank strings.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_in_validation_order() {
        assert_eq!(
            PreferenceField::all(),
            &[
                PreferenceField::Language,
                PreferenceField::Region,
                PreferenceField::TimeZone
            ]
        );
    }

    #[test]
    fn test_field_labels_and_messages() {
        assert_eq!(PreferenceField::TimeZone.label(), "Time-Zone");
        assert_eq!(
            PreferenceField::Language.error_message(),
            "There was a problem updating your Language. Please try again."
        );
        assert_eq!(
            PreferenceField::TimeZone.error_message(),
            "There was a problem updating your Time-Zone. Please try again."
        );
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("Language".parse::<PreferenceField>(), Ok(PreferenceField::Language));
        assert_eq!("region".parse::<PreferenceField>(), Ok(PreferenceField::Region));
        assert_eq!("time-zone".parse::<PreferenceField>(), Ok(PreferenceField::TimeZone));
        assert_eq!("timezone".parse::<PreferenceField>(), Ok(PreferenceField::TimeZone));
        assert!("currency".parse::<PreferenceField>().is_err());
    }

    #[test]
    fn test_default_catalog() {
        let options = PreferenceOptions::default();
        assert_eq!(options.languages.len(), 9);
        assert_eq!(options.regions[1], "Canada");
        assert_eq!(options.time_zones[3], "(UTC-05:00) Eastern");
        assert!(options.contains(PreferenceField::Language, "English"));
        assert!(!options.contains(PreferenceField::Region, "English"));
    }

    #[test]
    fn test_update_wire_format() {
        let update = PreferencesUpdate {
            language: "English".into(),
            region: "Canada".into(),
            time_zone: "(UTC-05:00) Eastern".into(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["time_zone"], "(UTC-05:00) Eastern");
    }

    #[test]
    fn test_response_message() {
        let resp: SaveResponse =
            serde_json::from_str(r#"{"message":"Settings have been saved successfully."}"#)
                .unwrap();
        assert_eq!(resp.message(), Some("Settings have been saved successfully."));

        let blank: SaveResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(blank.message(), None);

        let missing: SaveResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.message(), None);
    }
}
