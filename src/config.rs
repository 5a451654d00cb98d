//! Persistence of the visitor's language preference.
//!
//! The preference is a single string key stored in a `settings.toml` under
//! the platform config directory. [`PreferenceStore`] is the seam the
//! language manager writes through, so the selection logic can be exercised
//! against an in-memory store without touching the filesystem.
//!
//! # Examples
//!
//! ```no_run
//! use speats_site::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Speats";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// The persistent key-value store the language manager writes through.
/// Reads happen once at initialization; writes on every language change.
pub trait PreferenceStore {
    fn language(&self) -> Option<String>;
    fn set_language(&mut self, code: &str) -> Result<()>;
}

/// File-backed store persisting through the config module at an explicit
/// path. The path is explicit so tests can point it at a temp directory.
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    pub fn open(path: PathBuf) -> Self {
        let config = if path.exists() {
            load_from_path(&path).unwrap_or_default()
        } else {
            Config::default()
        };
        Self { path, config }
    }

    /// Opens the store at the platform config location. `None` when the
    /// platform reports no config directory.
    pub fn open_default() -> Option<Self> {
        get_default_config_path().map(Self::open)
    }
}

impl PreferenceStore for ConfigStore {
    fn language(&self) -> Option<String> {
        self.config.language.clone()
    }

    fn set_language(&mut self, code: &str) -> Result<()> {
        self.config.language = Some(code.to_string());
        save_to_path(&self.config, &self.path)
    }
}

/// In-memory store for tests and headless embedding. Counts writes so the
/// detect-at-most-once behavior is observable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    language: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new(language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
            writes: 0,
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn set_language(&mut self, code: &str) -> Result<()> {
        self.language = Some(code.to_string());
        self.writes += 1;
        Ok(())
    }
}
