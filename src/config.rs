//! Configuration: embedded defaults plus an optional user overlay.
//!
//! The defaults ship inside the binary; a user file at `$EVALQUOTE_CONFIG`
//! or `~/.config/evalquote/config.toml` overrides individual keys. A missing
//! file is fine; an unreadable or invalid one is a fatal config error.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;
use crate::quote::Verbosity;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
}

/// Default values for the options the CLI can override.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub verbosity: Verbosity,
    pub newline: bool,
    pub cut: bool,
    pub trailing_empty: bool,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigOverlay {
    settings: SettingsOverlay,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SettingsOverlay {
    verbosity: Option<Verbosity>,
    newline: Option<bool>,
    cut: Option<bool>,
    trailing_empty: Option<bool>,
}

impl Config {
    /// The embedded defaults with no user overlay.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid TOML")
    }

    /// Load the defaults and merge the user overlay file, if any.
    pub fn load() -> Result<Self, Error> {
        let mut config = Self::default_config();
        let Some(path) = user_config_path() else {
            return Ok(config);
        };
        if !path.exists() {
            return Ok(config);
        }
        let display = path.display().to_string();
        let text = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: display.clone(),
            source,
        })?;
        let overlay: ConfigOverlay =
            toml::from_str(&text).map_err(|source| Error::ConfigParse {
                path: display.clone(),
                source,
            })?;
        config.merge(overlay);
        log::debug!("merged user config from {display}");
        Ok(config)
    }

    fn merge(&mut self, overlay: ConfigOverlay) {
        let settings = overlay.settings;
        if let Some(verbosity) = settings.verbosity {
            self.settings.verbosity = verbosity;
        }
        if let Some(newline) = settings.newline {
            self.settings.newline = newline;
        }
        if let Some(cut) = settings.cut {
            self.settings.cut = cut;
        }
        if let Some(trailing_empty) = settings.trailing_empty {
            self.settings.trailing_empty = trailing_empty;
        }
    }
}

/// `$EVALQUOTE_CONFIG` wins; otherwise the XDG-ish default location.
fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("EVALQUOTE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let expanded = shellexpand::tilde("~/.config/evalquote/config.toml");
    if expanded.starts_with('~') {
        // No home directory to expand against.
        return None;
    }
    Some(PathBuf::from(expanded.as_ref()))
}
