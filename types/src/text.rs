//! User-facing strings.
//!
//! Driving test suites locate controls by these labels, so they must not
//! drift from what the form renders.

pub const HEADING: &str = "Language & Region";
pub const SUBHEADING: &str = "Customize your language and region preferences";

pub const LANGUAGE_LABEL: &str = "Language";
pub const REGION_LABEL: &str = "Region";
pub const TIME_ZONE_LABEL: &str = "Time-Zone";

pub const SAVE_LABEL: &str = "Save";
pub const CANCEL_LABEL: &str = "Cancel";

/// Shown when the save endpoint fails without a usable message of its own.
pub const SAVE_FAILED_FALLBACK: &str = "Error updating settings. Please try again.";

/// Validation message for a field left unset at save time.
///
/// ```
/// use prefs_types::text::field_error_message;
/// assert_eq!(
///     field_error_message("Region"),
///     "There was a problem updating your Region. Please try again."
/// );
/// ```
pub fn field_error_message(label: &str) -> String {
    format!("There was a problem updating your {label}. Please try again.")
}

/// Shown when the save endpoint succeeds without a message of its own.
pub const SAVE_SUCCEEDED_FALLBACK: &str = "Settings have been saved successfully.";
