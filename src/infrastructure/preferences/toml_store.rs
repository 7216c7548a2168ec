//! TOML preference store adapter

use std::fs;
use std::path::PathBuf;

use crate::application::ports::PreferenceStore;
use crate::domain::config::RecordPreferences;
use crate::domain::error::ConfigError;

/// Preferences kept in a TOML file under the XDG config directory
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    /// Create a store at the default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("call-record");

        Self {
            path: config_dir.join("preferences.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<RecordPreferences, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(prefs: &RecordPreferences) -> Result<String, ConfigError> {
        toml::to_string_pretty(prefs).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for TomlPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load(&self) -> Result<RecordPreferences, ConfigError> {
        if !self.exists() {
            return Ok(RecordPreferences::empty());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn save(&self, prefs: &RecordPreferences) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(prefs)?;
        fs::write(&self.path, content).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recording::{AudioSource, OutputFormat};

    #[test]
    fn default_path_is_xdg() {
        let store = TomlPreferenceStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("call-record"));
        assert!(path.to_string_lossy().ends_with("preferences.toml"));
    }

    #[test]
    fn custom_path() {
        let store = TomlPreferenceStore::with_path("/custom/path/prefs.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/prefs.toml"));
    }

    #[test]
    fn parse_partial_file() {
        let content = r#"
save_file = false
file_name = "Call"
audio_source = 1
"#;

        let prefs = TomlPreferenceStore::parse_toml(content).unwrap();
        assert_eq!(prefs.save_file, Some(false));
        assert_eq!(prefs.file_name.as_deref(), Some("Call"));
        assert_eq!(prefs.audio_source, Some(AudioSource::Mic));
        assert!(prefs.dir_name.is_none());
    }

    #[test]
    fn parse_error_is_reported() {
        let err = TomlPreferenceStore::parse_toml("save_file = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join("none.toml"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), RecordPreferences::empty());
    }

    #[test]
    fn save_creates_parent_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join("nested/prefs.toml"));
        let prefs = RecordPreferences {
            dir_path: Some("/data".to_string()),
            output_format: Some(OutputFormat::ThreeGpp),
            ..RecordPreferences::defaults()
        };

        store.save(&prefs).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join("prefs.toml"));

        store.init().unwrap();
        assert_eq!(store.load().unwrap().file_name.as_deref(), Some("Record"));
        assert!(matches!(store.init(), Err(ConfigError::AlreadyExists(_))));
    }
}
