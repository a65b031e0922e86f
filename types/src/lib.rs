//! Shared types for the Language & Region preferences form.
//!
//! Used by the core form logic, the web frontend and the CLI so that field
//! names, option catalogs and wire payloads stay in one place.

pub mod config;
pub mod preferences;
pub mod text;

pub use config::{OptionOverrides, PrefsConfig, DEFAULT_ENDPOINT};
pub use preferences::{
    PreferenceField, PreferenceOptions, PreferencesUpdate, SaveResponse, UnknownField,
};
