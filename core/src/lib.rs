pub mod config;
pub mod endpoint;
pub mod error;
pub mod form;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

// Re-exports for convenience
pub use config::{default_config_path, load_config, save_config};
pub use endpoint::{SettingsEndpoint, interpret_response};
pub use error::{ConfigError, FormError, SaveError};
pub use form::{Notice, PreferencesForm, SaveTicket};
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpEndpoint;
pub use prefs_types::{PreferenceField, PreferenceOptions, PreferencesUpdate, PrefsConfig, SaveResponse};
