//! In-memory preference store adapter
//!
//! Used by tests and when nothing should touch the disk.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::ports::PreferenceStore;
use crate::domain::config::RecordPreferences;
use crate::domain::error::ConfigError;

/// Preferences held in memory for the lifetime of the store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    prefs: Mutex<Option<RecordPreferences>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `prefs`
    pub fn with_preferences(prefs: RecordPreferences) -> Self {
        Self {
            prefs: Mutex::new(Some(prefs)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<RecordPreferences, ConfigError> {
        let guard = self
            .prefs
            .lock()
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, prefs: &RecordPreferences) -> Result<(), ConfigError> {
        let mut guard = self
            .prefs
            .lock()
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        *guard = Some(prefs.clone());
        Ok(())
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("memory")
    }

    fn exists(&self) -> bool {
        self.prefs.lock().map(|g| g.is_some()).unwrap_or(false)
    }
}
