//! Language & Region preferences web frontend.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use prefs_types::PreferenceOptions;

mod api;
mod components;

use components::Preferences;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let endpoint_url = use_hook(api::endpoint_url);

    rsx! {
        main { class: "app",
            Preferences {
                options: PreferenceOptions::default(),
                endpoint_url,
            }
        }
    }
}
