use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prefs_cli::commands;
use prefs_core::{HttpEndpoint, PreferencesForm, default_config_path, load_config, save_config};
use prefs_types::{PreferenceField, PrefsConfig};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Language & Region preferences")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable options
    Options {
        #[arg(short, long)]
        field: Option<PreferenceField>,
    },
    /// Show the effective config
    Config,
    /// Write a default config file if none exists
    InitConfig,
    /// Select preferences and save them
    Save {
        #[arg(short, long)]
        language: Option<String>,
        #[arg(short, long)]
        region: Option<String>,
        #[arg(short, long = "time-zone")]
        time_zone: Option<String>,
        /// Override the configured endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },
}

/// Initialize logging, writing to PREFS_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("PREFS_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf, String> {
    explicit
        .or_else(default_config_path)
        .ok_or_else(|| "No config directory available; pass --config".to_string())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();
    let path = config_path(cli.config)?;
    let config = load_config(&path).map_err(|e| e.to_string())?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Options { field } => {
            commands::list_options(&mut stdout, &config.option_catalog(), field)?;
        }
        Commands::Config => commands::show_config(&mut stdout, &config)?,
        Commands::InitConfig => {
            if path.exists() {
                tracing::info!(path = %path.display(), "config already exists");
            } else {
                save_config(&path, &PrefsConfig::default()).map_err(|e| e.to_string())?;
                writeln!(stdout, "Wrote {}", path.display()).map_err(|e| e.to_string())?;
            }
        }
        Commands::Save {
            language,
            region,
            time_zone,
            endpoint,
        } => {
            let endpoint = match endpoint {
                Some(url) => HttpEndpoint::from_config(&PrefsConfig {
                    endpoint: url,
                    ..config.clone()
                }),
                None => HttpEndpoint::from_config(&config),
            };
            let mut form = PreferencesForm::new(config.option_catalog());
            let selections = [
                (PreferenceField::Language, language),
                (PreferenceField::Region, region),
                (PreferenceField::TimeZone, time_zone),
            ];

            commands::save_preferences(&mut stdout, &mut form, &endpoint, &selections).await?;
            stdout.flush().map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
