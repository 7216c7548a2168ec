//! Preference storage port interface

use std::path::PathBuf;

use crate::domain::config::RecordPreferences;
use crate::domain::error::ConfigError;

/// Port for persistent preference storage
pub trait PreferenceStore: Send + Sync {
    /// Load preferences from storage.
    ///
    /// # Returns
    /// The stored preferences (all None if nothing was stored yet)
    fn load(&self) -> Result<RecordPreferences, ConfigError>;

    /// Replace the stored preferences.
    ///
    /// # Arguments
    /// * `prefs` - The preferences to store
    fn save(&self, prefs: &RecordPreferences) -> Result<(), ConfigError>;

    /// Location of the storage, for display
    fn path(&self) -> PathBuf;

    /// Check if anything has been stored.
    fn exists(&self) -> bool;

    /// Store the default preferences.
    /// Fails if preferences already exist.
    fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path().to_string_lossy().to_string(),
            ));
        }
        self.save(&RecordPreferences::defaults())
    }

    /// Load, change and save in one step
    fn update(&self, change: &dyn Fn(&mut RecordPreferences)) -> Result<(), ConfigError> {
        let mut prefs = self.load()?;
        change(&mut prefs);
        self.save(&prefs)
    }
}
