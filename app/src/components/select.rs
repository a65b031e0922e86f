//! Dropdown control for a single preference field.
//!
//! The trigger button carries the field label as its accessible name and
//! shows the current value as its text (empty while unset). Clicking it
//! toggles a listbox of options.

use dioxus::prelude::*;
use prefs_types::PreferenceField;

#[component]
pub fn Select(
    field: PreferenceField,
    options: Vec<String>,
    value: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let trigger_id = format!("prefs-{}", field.key());
    let list_id = format!("prefs-{}-options", field.key());
    let label = field.label();
    let shown = value.clone().unwrap_or_default();

    rsx! {
        div { class: "prefs-field",
            label { r#for: "{trigger_id}", class: "field-header", "{label}" }
            div { class: "prefs-select",
                button {
                    id: "{trigger_id}",
                    r#type: "button",
                    class: if open() { "prefs-select-trigger open" } else { "prefs-select-trigger" },
                    aria_label: label,
                    aria_haspopup: "listbox",
                    aria_expanded: open(),
                    aria_controls: "{list_id}",
                    onclick: move |_| open.toggle(),
                    span { class: "prefs-select-value", "{shown}" }
                    i { class: "fa-solid fa-chevron-down" }
                }
                if open() {
                    ul { id: "{list_id}", class: "prefs-select-list", role: "listbox",
                        for opt in options.iter() {
                            {
                                let opt = opt.clone();
                                let selected = value.as_deref() == Some(opt.as_str());
                                rsx! {
                                    li {
                                        key: "{opt}",
                                        role: "option",
                                        class: if selected { "prefs-option selected" } else { "prefs-option" },
                                        aria_selected: selected,
                                        onclick: {
                                            let opt = opt.clone();
                                            move |_| {
                                                open.set(false);
                                                on_select.call(opt.clone());
                                            }
                                        },
                                        "{opt}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
