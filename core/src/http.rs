//! `reqwest`-backed save endpoint for native clients

use std::time::Duration;

use prefs_types::{PreferencesUpdate, PrefsConfig, SaveResponse};

use crate::endpoint::{SettingsEndpoint, interpret_response};
use crate::error::SaveError;

const USER_AGENT: &str = concat!("locale-prefs/", env!("CARGO_PKG_VERSION"));

/// POSTs the update as JSON to a fixed URL
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_config(config: &PrefsConfig) -> Self {
        let endpoint = Self::new(config.endpoint.clone());
        match config.timeout_secs {
            Some(secs) => endpoint.with_timeout(Duration::from_secs(secs)),
            None => endpoint,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SettingsEndpoint for HttpEndpoint {
    async fn save(&self, update: &PreferencesUpdate) -> Result<SaveResponse, SaveError> {
        let mut request = self
            .client
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .json(update);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(url = %self.url, "sending preferences");
        let response = request
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SaveError::Transport(format!("failed to read response: {}", e)))?;

        interpret_response(status, &body)
    }
}
