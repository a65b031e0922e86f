//! Inline success/error message under the preferences form.

use dioxus::prelude::*;
use prefs_core::Notice;

#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    let (class, icon) = if notice.is_error() {
        ("prefs-notice prefs-notice-error", "fa-solid fa-triangle-exclamation")
    } else {
        ("prefs-notice prefs-notice-success", "fa-solid fa-circle-check")
    };
    let message = notice.message().to_string();

    rsx! {
        div { class: "{class}", role: if notice.is_error() { "alert" } else { "status" },
            span { class: "prefs-notice-icon", i { class: "{icon}" } }
            span { class: "prefs-notice-message", "{message}" }
        }
    }
}
