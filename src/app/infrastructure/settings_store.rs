//! JSON file-backed configuration store.
//!
//! Editors with their own settings system answer
//! [`EditorHost::configuration`](super::host::EditorHost::configuration)
//! directly. Standalone hosts can keep a `settings.json` instead: one JSON
//! object per namespace, read with [`SettingsFile::section`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::error::Result;
use crate::app::domain::SigSettings;
use crate::app::domain::settings::CONFIG_NAMESPACE;

#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    root: Map<String, Value>,
}

impl SettingsFile {
    /// Load from the default location, or create it with defaults.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load from `path`, or create it with defaults if it doesn't exist.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(root) => Self { path, root },
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}. Using defaults.", path.display());
                    Self::with_defaults(path)
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::with_defaults(path);
                // Try to save defaults for next time
                if let Err(e) = default.save() {
                    tracing::debug!("Could not write default settings: {e}");
                }
                default
            }
        }
    }

    fn with_defaults(path: PathBuf) -> Self {
        let mut root = Map::new();
        if let Ok(value) = serde_json::to_value(SigSettings::default()) {
            root.insert(CONFIG_NAMESPACE.to_string(), value);
        }
        Self { path, root }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.root)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sig-hider");
        path.push("settings.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw section stored under `namespace`, `Null` if absent.
    pub fn section(&self, namespace: &str) -> Value {
        self.root.get(namespace).cloned().unwrap_or(Value::Null)
    }

    pub fn settings(&self) -> SigSettings {
        SigSettings::from_section(self.section(CONFIG_NAMESPACE))
    }

    /// Replace the stored signature settings. Call [`save`](Self::save) to persist.
    pub fn set_settings(&mut self, settings: &SigSettings) -> Result<()> {
        let value = serde_json::to_value(settings)?;
        self.root.insert(CONFIG_NAMESPACE.to_string(), value);
        Ok(())
    }
}
