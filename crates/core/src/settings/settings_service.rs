use log::debug;
use std::path::Path;

use super::AnalyticsSettings;
use crate::constants::ENV_PREFIX;
use crate::errors::{Error, Result};

pub const ENV_RECENT_HIGH_WINDOW: &str = "RECENT_HIGH_WINDOW";
pub const ENV_STREAK_THRESHOLD: &str = "STREAK_THRESHOLD";
pub const ENV_ALERT_ON_HIGH: &str = "ALERT_ON_HIGH";
pub const ENV_LEGACY_BENCHMARK: &str = "LEGACY_BENCHMARK";
pub const ENV_DEFAULT_BENCHMARK: &str = "DEFAULT_BENCHMARK";
pub const ENV_DEFAULT_PERIOD: &str = "DEFAULT_PERIOD";
pub const ENV_LOCALE: &str = "LOCALE";

impl AnalyticsSettings {
    /// Parses settings from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: AnalyticsSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigIO(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!("Loaded analytics settings from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Defaults overridden by `PULSEFOLIO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default()
            .with_overrides(|name| std::env::var(format!("{}{}", ENV_PREFIX, name)).ok())
    }

    /// Applies overrides from `lookup`, keyed by the unprefixed variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_RECENT_HIGH_WINDOW) {
            self.recent_high_window = parse_value(ENV_RECENT_HIGH_WINDOW, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STREAK_THRESHOLD) {
            self.streak_alert_threshold = parse_value(ENV_STREAK_THRESHOLD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ALERT_ON_HIGH) {
            self.alert_on_recent_high = parse_bool(ENV_ALERT_ON_HIGH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LEGACY_BENCHMARK) {
            self.legacy_benchmark = parse_value(ENV_LEGACY_BENCHMARK, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_BENCHMARK) {
            self.default_benchmark = parse_value(ENV_DEFAULT_BENCHMARK, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_PERIOD) {
            self.default_period = parse_value(ENV_DEFAULT_PERIOD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOCALE) {
            let locale = raw.trim();
            if !locale.is_empty() {
                self.locale = locale.to_string();
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.recent_high_window == 0 {
            return Err(Error::InvalidConfigValue(
                "recentHighWindow must be at least 1".to_string(),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "locale must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        Error::InvalidConfigValue(format!("{}{}='{}': {}", ENV_PREFIX, name, raw, e))
    })
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfigValue(format!(
            "{}{}='{}': expected a boolean",
            ENV_PREFIX, name, raw
        ))),
    }
}
