// src/config.rs
//! Persisted defaults for the sync options, stored as TOML.

use crate::error::SyncError;
use anyhow::{Context as _, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "cursync.toml";

const fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_patterns: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub overwrite_headers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub git_without_push: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RulesDir,
    FilePatterns,
    OverwriteHeaders,
    GitWithoutPush,
}

impl ConfigKey {
    pub const ALL: [Self; 4] = [
        Self::RulesDir,
        Self::FilePatterns,
        Self::OverwriteHeaders,
        Self::GitWithoutPush,
    ];

    /// Flag-style spelling, e.g. `rules-dir`.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RulesDir => "rules-dir",
            Self::FilePatterns => "file-patterns",
            Self::OverwriteHeaders => "overwrite-headers",
            Self::GitWithoutPush => "git-without-push",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = SyncError;

    /// Accepts both `rules-dir` and `rules_dir` spellings.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| SyncError::UnknownConfigKey(raw.to_owned()))
    }
}

/// Parses `true/false/1/0/yes/no`, ignoring case.
///
/// # Errors
///
/// Returns [`SyncError::InvalidBool`] for anything else.
pub fn parse_bool(key: ConfigKey, value: &str) -> Result<bool, SyncError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SyncError::InvalidBool {
            key: key.to_string(),
            value: value.to_owned(),
        }),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl Config {
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::RulesDir => self.rules_dir.clone(),
            ConfigKey::FilePatterns => self.file_patterns.clone(),
            ConfigKey::OverwriteHeaders => Some(self.overwrite_headers.to_string()),
            ConfigKey::GitWithoutPush => Some(self.git_without_push.to_string()),
        }
    }

    /// Sets one key. An empty value clears a string key.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidBool`] when a boolean key gets a value
    /// [`parse_bool`] does not accept.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), SyncError> {
        match key {
            ConfigKey::RulesDir => self.rules_dir = non_empty(value),
            ConfigKey::FilePatterns => self.file_patterns = non_empty(value),
            ConfigKey::OverwriteHeaders => self.overwrite_headers = parse_bool(key, value)?,
            ConfigKey::GitWithoutPush => self.git_without_push = parse_bool(key, value)?,
        }
        Ok(())
    }

    /// Keys that hold a non-default value, in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(ConfigKey, String)> {
        let mut entries = Vec::new();
        if let Some(dir) = &self.rules_dir {
            entries.push((ConfigKey::RulesDir, dir.clone()));
        }
        if let Some(patterns) = &self.file_patterns {
            entries.push((ConfigKey::FilePatterns, patterns.clone()));
        }
        if self.overwrite_headers {
            entries.push((ConfigKey::OverwriteHeaders, "true".to_owned()));
        }
        if self.git_without_push {
            entries.push((ConfigKey::GitWithoutPush, "true".to_owned()));
        }
        entries
    }
}

/// A config file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.config/cursync.toml`
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("cannot determine home directory"))?;
        Ok(Self::new(home.join(".config").join(CONFIG_FILE_NAME)))
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file; a missing file is an empty config.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config file {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", self.path.display()))
    }

    /// # Errors
    ///
    /// Fails when the parent directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let content = toml::to_string(config).context("failed to serialize config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write config file {}", self.path.display()))
    }
}
