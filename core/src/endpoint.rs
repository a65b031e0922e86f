//! The save endpoint seam
//!
//! The form only knows how to hand a [`PreferencesUpdate`] to something that
//! eventually answers with a [`SaveResponse`] or a [`SaveError`]. The HTTP
//! client, the browser fetch client and test doubles all plug in here.

use std::future::Future;

use prefs_types::{PreferencesUpdate, SaveResponse};

use crate::error::SaveError;

/// External collaborator that persists a completed set of preferences
pub trait SettingsEndpoint {
    fn save(
        &self,
        update: &PreferencesUpdate,
    ) -> impl Future<Output = Result<SaveResponse, SaveError>>;
}

/// Interpret a raw endpoint reply
///
/// 2xx bodies must parse as a [`SaveResponse`]. Any other status becomes
/// [`SaveError::Rejected`], keeping the body's `message` when it has one.
pub fn interpret_response(status: u16, body: &str) -> Result<SaveResponse, SaveError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<SaveResponse>(body)
            .map_err(|e| SaveError::MalformedBody(e.to_string()));
    }

    let message = serde_json::from_str::<SaveResponse>(body)
        .ok()
        .and_then(|resp| resp.message().map(str::to_string));

    Err(SaveError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let resp =
            interpret_response(200, r#"{"message":"Settings have been saved successfully."}"#)
                .unwrap();
        assert_eq!(resp.message(), Some("Settings have been saved successfully."));
    }

    #[test]
    fn test_success_without_message() {
        let resp = interpret_response(204, "{}").unwrap();
        assert_eq!(resp.message(), None);
    }

    #[test]
    fn test_success_with_garbage_body() {
        let err = interpret_response(200, "<html>ok</html>").unwrap_err();
        assert!(matches!(err, SaveError::MalformedBody(_)));
    }

    #[test]
    fn test_rejected_keeps_server_message() {
        let err = interpret_response(
            500,
            r#"{"message":"Error updating settings. Please try again."}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SaveError::Rejected {
                status: 500,
                message: Some("Error updating settings. Please try again.".into()),
            }
        );
    }

    #[test]
    fn test_rejected_with_unreadable_body() {
        let err = interpret_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            SaveError::Rejected {
                status: 502,
                message: None
            }
        );
    }
}
