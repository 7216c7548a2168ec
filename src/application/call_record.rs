//! Call recording setup and settings
//!
//! Entry point used by front ends: applies a configuration, toggles saving,
//! renames the output locations and wires up a receiver.

use std::sync::Arc;

use tracing::info;

use crate::domain::config::preferences::{default_dir_path, DEFAULT_DIR_NAME, DEFAULT_FILE_NAME};
use crate::domain::config::{require_non_empty, RecordConfig, RecordPreferences};
use crate::domain::error::ConfigError;

use super::ports::{AudioCapture, PreferenceStore};
use super::receiver::CallReceiver;
use super::recording::RecordingController;

/// Recording settings backed by a preference store
pub struct CallRecord<S: PreferenceStore> {
    store: Arc<S>,
}

impl<S: PreferenceStore> CallRecord<S> {
    /// Apply `config` to the store and enable saving.
    ///
    /// All settings are written in a single save, on top of whatever the
    /// store already holds.
    pub fn new(store: Arc<S>, config: &RecordConfig) -> Result<Self, ConfigError> {
        let applied = RecordPreferences {
            save_file: Some(true),
            ..config.to_preferences()
        };
        let prefs = store.load()?.merge(applied);
        store.save(&prefs)?;
        info!(dir = %config.record_dir().display(), "Call recording configured");
        Ok(Self { store })
    }

    /// Use the settings already in the store, without writing anything
    pub fn open(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Current resolved configuration
    pub fn config(&self) -> Result<RecordConfig, ConfigError> {
        RecordConfig::from_preferences(&self.store.load()?)
    }

    pub fn enable_save_file(&self) -> Result<(), ConfigError> {
        self.store.update(&|prefs| prefs.save_file = Some(true))?;
        info!("Saving recordings enabled");
        Ok(())
    }

    pub fn disable_save_file(&self) -> Result<(), ConfigError> {
        self.store.update(&|prefs| prefs.save_file = Some(false))?;
        info!("Saving recordings disabled");
        Ok(())
    }

    pub fn save_file_enabled(&self) -> Result<bool, ConfigError> {
        Ok(self.store.load()?.save_file_or_default())
    }

    /// Rename the base name of recording files
    pub fn change_record_file_name(&self, name: &str) -> Result<(), ConfigError> {
        let name = require_non_empty("file_name", Some(name.to_string()))?;
        self.store.update(&|prefs| prefs.file_name = Some(name.clone()))
    }

    /// Rename the recordings directory
    pub fn change_record_dir_name(&self, name: &str) -> Result<(), ConfigError> {
        let name = require_non_empty("dir_name", Some(name.to_string()))?;
        self.store.update(&|prefs| prefs.dir_name = Some(name.clone()))
    }

    /// Move the recordings directory under `path`
    pub fn change_record_dir_path(&self, path: &str) -> Result<(), ConfigError> {
        let path = require_non_empty("dir_path", Some(path.to_string()))?;
        self.store.update(&|prefs| prefs.dir_path = Some(path.clone()))
    }

    /// Stored base name of recording files, or the default when unset or empty
    pub fn record_file_name(&self) -> Result<String, ConfigError> {
        let stored = self.store.load()?.file_name;
        Ok(stored_or(stored, || DEFAULT_FILE_NAME.to_string()))
    }

    pub fn record_dir_name(&self) -> Result<String, ConfigError> {
        let stored = self.store.load()?.dir_name;
        Ok(stored_or(stored, || DEFAULT_DIR_NAME.to_string()))
    }

    pub fn record_dir_path(&self) -> Result<String, ConfigError> {
        let stored = self.store.load()?.dir_path;
        Ok(stored_or(stored, default_dir_path))
    }

    /// Build a receiver that records calls through `capture`.
    /// The receiver is already listening.
    pub fn receiver<C: AudioCapture>(
        &self,
        capture: C,
    ) -> CallReceiver<RecordingController<S, C>> {
        let controller = RecordingController::new(Arc::clone(&self.store), capture);
        let mut receiver = CallReceiver::new(controller);
        receiver.start_listening();
        receiver
    }
}

fn stored_or(value: Option<String>, default: impl FnOnce() -> String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(default)
}
