use std::path::Path;

use anyhow::{Context, Result};
use pnl_journal_core::models::settings::Settings;
use tracing::debug;

/// Load settings from a TOML file, or defaults when no path is given.
///
/// Missing fields fall back to their defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings = parse_settings(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(raw).context("Failed to parse TOML")?;
    settings.validate()?;
    Ok(settings)
}
