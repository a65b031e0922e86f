//! Command implementations for the `prefs` binary.
//!
//! Each command writes its user-facing output to the given writer so the
//! same code drives the terminal and the tests.

use std::io::Write;

use prefs_core::{Notice, PreferencesForm, SettingsEndpoint};
use prefs_types::text::SAVE_FAILED_FALLBACK;
use prefs_types::{PreferenceField, PreferenceOptions, PrefsConfig};

fn io_err(e: std::io::Error) -> String {
    e.to_string()
}

/// Print the option catalog, optionally for a single field.
pub fn list_options(
    out: &mut impl Write,
    catalog: &PreferenceOptions,
    only: Option<PreferenceField>,
) -> Result<(), String> {
    let fields: Vec<PreferenceField> = match only {
        Some(field) => vec![field],
        None => PreferenceField::all().to_vec(),
    };

    for field in fields {
        writeln!(out, "{}:", field.label()).map_err(io_err)?;
        for (i, option) in catalog.for_field(field).iter().enumerate() {
            writeln!(out, "  {:>2}. {}", i + 1, option).map_err(io_err)?;
        }
    }
    Ok(())
}

/// Print the effective config as TOML.
pub fn show_config(out: &mut impl Write, config: &PrefsConfig) -> Result<(), String> {
    let rendered = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
    write!(out, "{}", rendered).map_err(io_err)?;
    Ok(())
}

/// Fill the form from the given selections and save it.
///
/// Unset selections are left unset so the form reports them the same way
/// the web UI does. The success notice is printed; an error notice comes
/// back as the `Err` so the caller decides how to surface it.
pub async fn save_preferences<E: SettingsEndpoint>(
    out: &mut impl Write,
    form: &mut PreferencesForm,
    endpoint: &E,
    selections: &[(PreferenceField, Option<String>)],
) -> Result<(), String> {
    for (field, value) in selections {
        if let Some(value) = value {
            form.select(*field, value.clone()).map_err(|e| e.to_string())?;
        }
    }

    match form.save(endpoint).await {
        Some(Notice::Success(msg)) => {
            writeln!(out, "{}", msg).map_err(io_err)?;
            Ok(())
        }
        Some(Notice::Error(msg)) => Err(msg.clone()),
        None => Err(SAVE_FAILED_FALLBACK.to_string()),
    }
}
