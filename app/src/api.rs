//! Browser save endpoint
//!
//! Sends the preferences update with `window.fetch` and hands the raw status
//! and body to the shared response interpreter, so the browser and native
//! clients agree on what counts as success.

use prefs_core::{SaveError, SettingsEndpoint, interpret_response};
use prefs_types::{PreferencesUpdate, SaveResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Used when the host page does not set `window.PREFS_ENDPOINT`.
const DEFAULT_PATH: &str = "/api/preferences";

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Extract an error message from a rejected JS promise or failed call
fn js_err(e: JsValue) -> SaveError {
    SaveError::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Save URL, overridable by the host page through `window.PREFS_ENDPOINT`
pub fn endpoint_url() -> String {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("PREFS_ENDPOINT")).ok())
        .and_then(|value| value.as_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_PATH.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Fetch Endpoint
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FetchEndpoint {
    url: String,
}

impl FetchEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn post(&self, body: &str) -> Result<(u16, String), SaveError> {
        let window = web_sys::window().ok_or_else(|| SaveError::Transport("No window".into()))?;

        let headers = web_sys::Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        let request = web_sys::Request::new_with_str_and_init(&self.url, &init).map_err(js_err)?;

        // Network failures reject the promise; HTTP errors resolve normally
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| SaveError::Transport("fetch did not return a Response".into()))?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok((status, text.as_string().unwrap_or_default()))
    }
}

impl SettingsEndpoint for FetchEndpoint {
    async fn save(&self, update: &PreferencesUpdate) -> Result<SaveResponse, SaveError> {
        let body =
            serde_json::to_string(update).map_err(|e| SaveError::Transport(e.to_string()))?;
        let (status, text) = self.post(&body).await?;
        interpret_response(status, &text)
    }
}
