//! Persisted configuration for the preferences clients.

use serde::{Deserialize, Serialize};

use crate::preferences::{PreferenceField, PreferenceOptions};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/preferences";

/// Top-level config, stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefsConfig {
    /// URL the save request is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout. `None` leaves the HTTP client default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Replacement option lists. Any list left out keeps the built-in one.
    #[serde(default, skip_serializing_if = "OptionOverrides::is_empty")]
    pub options: OptionOverrides,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            options: OptionOverrides::default(),
        }
    }
}

impl PrefsConfig {
    /// Built-in catalog with any configured overrides applied.
    pub fn option_catalog(&self) -> PreferenceOptions {
        self.options.apply(PreferenceOptions::default())
    }
}

/// Per-field option list overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zones: Option<Vec<String>>,
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        self.languages.is_none() && self.regions.is_none() && self.time_zones.is_none()
    }

    /// First field whose override is present but lists no options
    pub fn first_empty(&self) -> Option<PreferenceField> {
        [
            (PreferenceField::Language, &self.languages),
            (PreferenceField::Region, &self.regions),
            (PreferenceField::TimeZone, &self.time_zones),
        ]
        .into_iter()
        .find(|(_, list)| list.as_ref().is_some_and(Vec::is_empty))
        .map(|(field, _)| field)
    }

    pub fn apply(&self, mut base: PreferenceOptions) -> PreferenceOptions {
        if let Some(languages) = &self.languages {
            base.languages = languages.clone();
        }
        if let Some(regions) = &self.regions {
            base.regions = regions.clone();
        }
        if let Some(time_zones) = &self.time_zones {
            base.time_zones = time_zones.clone();
        }
        base
    }
}
