//! Settings for the catalogue front end.
//!
//! Read from `catalogue.ron` (or the file named by `CATALOGUE_CONFIG`), then
//! overridden by `CATALOGUE_SOURCE`, `CATALOGUE_LOG` and `CATALOGUE_LOG_FILE`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use catalogue_core::ContentFallback;
use catalogue_logging::LogDestination;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "catalogue.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub catalogue_source: PathBuf,
    pub carousel_images: Vec<String>,
    pub carousel_interval_ms: u64,
    pub fallback_url: String,
    pub fallback_description: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let fallback = ContentFallback::default();
        Self {
            catalogue_source: PathBuf::from("assets/products.csv"),
            carousel_images: (1..=4).map(|i| format!("/assets/image{i}.jpg")).collect(),
            carousel_interval_ms: 5000,
            fallback_url: fallback.url,
            fallback_description: fallback.description,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

impl AppSettings {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms.max(1))
    }

    pub fn fallback(&self) -> ContentFallback {
        ContentFallback {
            url: self.fallback_url.clone(),
            description: self.fallback_description.clone(),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::File(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}

/// Loads settings; a missing or malformed file falls back to defaults.
///
/// Runs before the logger exists, so problems are reported on stderr.
pub fn load_settings() -> AppSettings {
    let path = std::env::var("CATALOGUE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw).unwrap_or_else(|err| {
            eprintln!("Warning: ignoring malformed config {path}: {err}");
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub fn parse_settings(raw: &str) -> Result<AppSettings, ron::error::SpannedError> {
    ron::from_str(raw)
}

fn apply_env_overrides(settings: &mut AppSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CATALOGUE_SOURCE") {
        settings.catalogue_source = PathBuf::from(v);
    }
    if let Some(v) = lookup("CATALOGUE_LOG") {
        settings.log_level = v;
    }
    if let Some(v) = lookup("CATALOGUE_LOG_FILE") {
        settings.log_file = Some(PathBuf::from(v));
    }
}
