//! TOML-based settings for the synchroniser.
//!
//! Reads `SyncSettings` from the platform-appropriate settings file:
//! - Windows:  `%APPDATA%\StatusBoard\settings.toml`
//! - Linux:    `~/.config/statusboard/settings.toml`
//! - macOS:    `~/Library/Application Support/StatusBoard/settings.toml`
//!
//! Example:
//!
//! ```toml
//! log_level = "info"
//!
//! [store]
//! worksheet = "dashboard_data"
//! table_path = "/srv/statusboard/dashboard_data.csv"
//! ```
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file, so the app
//! works on first run (before a settings file exists) and when upgrading from
//! an older file that is missing newer fields.
//!
//! A missing or malformed settings file must never crash the process: the
//! binary maps any [`SettingsError`] into a connect failure (load degrades to
//! the default document, save reports and aborts).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for settings-file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Settings schema types ─────────────────────────────────────────────────────

/// Top-level synchroniser settings stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncSettings {
    #[serde(default)]
    pub store: StoreSettings,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where the flat row table lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSettings {
    /// Worksheet name inside the backing resource.  Also names the CSV file
    /// when `table_path` is not set explicitly.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    /// Explicit table file path.  When absent the table lives next to the
    /// settings file as `<worksheet>.csv`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_worksheet() -> String {
    "dashboard_data".to_string()
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            store: StoreSettings::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            worksheet: default_worksheet(),
            table_path: None,
        }
    }
}

impl StoreSettings {
    /// Resolves the table file path, falling back to the settings directory.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoPlatformConfigDir`] when no explicit path is
    /// set and the platform directory cannot be determined.
    pub fn resolve_table_path(&self) -> Result<PathBuf, SettingsError> {
        match &self.table_path {
            Some(path) => Ok(path.clone()),
            None => Ok(settings_dir()?.join(format!("{}.csv", self.worksheet))),
        }
    }
}

// ── Settings repository ───────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn settings_dir() -> Result<PathBuf, SettingsError> {
    platform_settings_dir().ok_or(SettingsError::NoPlatformConfigDir)
}

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn settings_file_path() -> Result<PathBuf, SettingsError> {
    Ok(settings_dir()?.join("settings.toml"))
}

/// Loads `SyncSettings` from disk, returning `SyncSettings::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings() -> Result<SyncSettings, SettingsError> {
    let path = settings_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let settings: SyncSettings = toml::from_str(&content)?;
            Ok(settings)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SyncSettings::default()),
        Err(e) => Err(SettingsError::Io { path, source: e }),
    }
}

/// Resolves the platform config base directory without the `StatusBoard`
/// subdirectory.
fn platform_settings_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("StatusBoard"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("statusboard"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("StatusBoard")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
