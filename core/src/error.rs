//! Error types for the preferences core

use std::path::PathBuf;

use prefs_types::PreferenceField;
use prefs_types::text::SAVE_FAILED_FALLBACK;
use thiserror::Error;

/// A save request that did not produce a success response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The request never got a response (connection, DNS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("endpoint rejected save with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A success status whose body could not be read as a save response
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl SaveError {
    /// Text for the error notice: the endpoint's own message when it sent
    /// one, otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => SAVE_FAILED_FALLBACK.to_string(),
        }
    }
}

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("'{value}' is not an available {field} option")]
    UnknownOption {
        field: PreferenceField,
        value: String,
    },
}

/// Errors that can occur while loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Empty {field} option list in {path:?}")]
    EmptyOptionList {
        path: PathBuf,
        field: PreferenceField,
    },

    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_message_is_shown_verbatim() {
        let err = SaveError::Rejected {
            status: 500,
            message: Some("Region is not supported.".into()),
        };
        assert_eq!(err.user_message(), "Region is not supported.");
    }

    #[test]
    fn test_other_failures_use_fallback() {
        let rejected = SaveError::Rejected {
            status: 503,
            message: None,
        };
        assert_eq!(rejected.user_message(), SAVE_FAILED_FALLBACK);
        assert_eq!(
            SaveError::Transport("connection refused".into()).user_message(),
            SAVE_FAILED_FALLBACK
        );
        assert_eq!(
            SaveError::MalformedBody("expected value".into()).user_message(),
            SAVE_FAILED_FALLBACK
        );
    }

    #[test]
    fn test_unknown_option_display() {
        let err = FormError::UnknownOption {
            field: PreferenceField::TimeZone,
            value: "Mars".into(),
        };
        assert_eq!(err.to_string(), "'Mars' is not an available Time-Zone option");
    }
}
