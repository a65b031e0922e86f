//! Language & Region preferences form
//!
//! All form state lives in a [`PreferencesForm`] held in a signal. Save takes
//! a ticket from the form, releases the signal while the request is in
//! flight, then hands the result back; the form drops results that a newer
//! save or a cancel has superseded. Controls stay enabled during a save.

use dioxus::prelude::*;
use prefs_core::{PreferencesForm, SettingsEndpoint};
use prefs_types::{PreferenceField, PreferenceOptions, text};

use super::notice::NoticeBanner;
use super::select::Select;
use crate::api::FetchEndpoint;

#[component]
pub fn Preferences(options: PreferenceOptions, endpoint_url: String) -> Element {
    let mut form = use_signal(|| PreferencesForm::new(options.clone()));

    let on_save = move |_: MouseEvent| {
        let Some(ticket) = form.write().begin_save() else {
            return;
        };
        let endpoint = FetchEndpoint::new(endpoint_url.clone());
        spawn(async move {
            let result = endpoint.save(ticket.update()).await;
            form.write().complete_save(ticket.token(), result);
        });
    };

    let state = form.read();

    rsx! {
        section { class: "prefs-panel",
            div { class: "prefs-header",
                h3 { {text::HEADING} }
                p { class: "prefs-subheading", {text::SUBHEADING} }
            }

            div { class: "prefs-fields",
                for field in PreferenceField::all().iter().copied() {
                    {
                        let key = field.key();
                        let options = state.options().for_field(field).to_vec();
                        let value = state.value(field).map(str::to_string);
                        rsx! {
                            Select {
                                key: "{key}",
                                field,
                                options,
                                value,
                                on_select: move |value: String| {
                                    if let Err(e) = form.write().select(field, value) {
                                        tracing::warn!("{}", e);
                                    }
                                },
                            }
                        }
                    }
                }
            }

            NoticeBanner { notice: state.notice().cloned() }

            // Footer with action buttons
            div { class: "prefs-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    aria_label: text::CANCEL_LABEL,
                    onclick: move |_| form.write().cancel(),
                    {text::CANCEL_LABEL}
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    aria_label: text::SAVE_LABEL,
                    onclick: on_save,
                    {text::SAVE_LABEL}
                }
            }
        }
    }
}
