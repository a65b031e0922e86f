//! Language & Region form state
//!
//! The form owns three selections and at most one visible [`Notice`]. Saving
//! is split in two halves so a UI can release its borrow of the form while
//! the request is in flight:
//!
//! 1. [`PreferencesForm::begin_save`] validates and, if every field is set,
//!    hands out a [`SaveTicket`] carrying the request body and a token.
//! 2. [`PreferencesForm::complete_save`] applies the endpoint result, but only
//!    if the ticket's token is still the latest one issued.
//!
//! Every save attempt and every cancel advances the token, so a slow response
//! from an older request can never overwrite the notice of a newer action.

use prefs_types::text::SAVE_SUCCEEDED_FALLBACK;
use prefs_types::{PreferenceField, PreferenceOptions, PreferencesUpdate, SaveResponse};

use crate::endpoint::SettingsEndpoint;
use crate::error::{FormError, SaveError};

/// The single message shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A validated save waiting for its endpoint result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    token: u64,
    update: PreferencesUpdate,
}

impl SaveTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn update(&self) -> &PreferencesUpdate {
        &self.update
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreferencesForm {
    options: PreferenceOptions,
    language: Option<String>,
    region: Option<String>,
    time_zone: Option<String>,
    notice: Option<Notice>,
    latest_token: u64,
}

impl PreferencesForm {
    /// Empty form offering the given options
    pub fn new(options: PreferenceOptions) -> Self {
        Self {
            options,
            language: None,
            region: None,
            time_zone: None,
            notice: None,
            latest_token: 0,
        }
    }

    pub fn options(&self) -> &PreferenceOptions {
        &self.options
    }

    fn slot(&self, field: PreferenceField) -> &Option<String> {
        match field {
            PreferenceField::Language => &self.language,
            PreferenceField::Region => &self.region,
            PreferenceField::TimeZone => &self.time_zone,
        }
    }

    fn slot_mut(&mut self, field: PreferenceField) -> &mut Option<String> {
        match field {
            PreferenceField::Language => &mut self.language,
            PreferenceField::Region => &mut self.region,
            PreferenceField::TimeZone => &mut self.time_zone,
        }
    }

    /// Set one field. Values outside that field's option list are refused
    /// and leave the form untouched.
    pub fn select(
        &mut self,
        field: PreferenceField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        if !self.options.contains(field, &value) {
            return Err(FormError::UnknownOption { field, value });
        }

        tracing::debug!(field = field.key(), value = %value, "preference selected");
        *self.slot_mut(field) = Some(value);
        Ok(())
    }

    /// Current value, `None` while unset
    pub fn value(&self, field: PreferenceField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Text the field's control displays: the value, or empty when unset
    pub fn display_text(&self, field: PreferenceField) -> &str {
        self.value(field).unwrap_or("")
    }

    /// Unset fields in validation order
    pub fn missing_fields(&self) -> Vec<PreferenceField> {
        PreferenceField::all()
            .iter()
            .copied()
            .filter(|field| self.slot(*field).is_none())
            .collect()
    }

    /// Validation message for `field` if it is currently unset
    pub fn field_error(&self, field: PreferenceField) -> Option<String> {
        self.slot(field).is_none().then(|| field.error_message())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Token of the most recent save attempt or cancel
    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    fn next_token(&mut self) -> u64 {
        self.latest_token += 1;
        self.latest_token
    }

    fn snapshot(&self) -> Option<PreferencesUpdate> {
        Some(PreferencesUpdate {
            language: self.language.clone()?,
            region: self.region.clone()?,
            time_zone: self.time_zone.clone()?,
        })
    }

    /// Validate and start a save
    ///
    /// Returns `None` when a field is unset; the first missing field's
    /// message (language, region, time-zone order) becomes the notice and
    /// no request must be sent. Otherwise the previous notice is cleared and
    /// the returned ticket carries the request body.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        let token = self.next_token();

        let Some(update) = self.snapshot() else {
            let missing = self.missing_fields();
            tracing::debug!(?missing, "save blocked by validation");
            self.notice = missing.first().map(|field| Notice::Error(field.error_message()));
            return None;
        };

        tracing::info!(token, "save request issued");
        self.notice = None;
        Some(SaveTicket { token, update })
    }

    /// Apply the endpoint result for the save identified by `token`
    ///
    /// Returns `false` and changes nothing if a newer save or a cancel has
    /// happened since the ticket was issued.
    pub fn complete_save(
        &mut self,
        token: u64,
        result: Result<SaveResponse, SaveError>,
    ) -> bool {
        if token != self.latest_token {
            tracing::warn!(
                token,
                latest = self.latest_token,
                "discarding stale save response"
            );
            return false;
        }

        self.notice = Some(match result {
            Ok(resp) => {
                tracing::info!(token, "preferences saved");
                Notice::Success(
                    resp.message()
                        .unwrap_or(SAVE_SUCCEEDED_FALLBACK)
                        .to_string(),
                )
            }
            Err(e) => {
                tracing::warn!(token, error = %e, "preferences save failed");
                Notice::Error(e.user_message())
            }
        });
        true
    }

    /// Validate, send through `endpoint` and apply the result
    ///
    /// Exactly one outbound call is made when all fields are set, none
    /// otherwise.
    pub async fn save<E: SettingsEndpoint>(&mut self, endpoint: &E) -> Option<&Notice> {
        if let Some(ticket) = self.begin_save() {
            let result = endpoint.save(ticket.update()).await;
            self.complete_save(ticket.token(), result);
        }
        self.notice.as_ref()
    }

    /// Reset every field to unset and clear the notice. Any save still in
    /// flight is orphaned.
    pub fn cancel(&mut self) {
        self.next_token();
        self.language = None;
        self.region = None;
        self.time_zone = None;
        self.notice = None;
        tracing::debug!("preferences form cancelled");
    }
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self::new(PreferenceOptions::default())
    }
}
