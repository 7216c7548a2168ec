//! Validated recording configuration

use std::path::PathBuf;

use crate::domain::call::CallDirection;
use crate::domain::error::ConfigError;
use crate::domain::recording::{AudioEncoder, AudioSource, OutputFormat, RecordFileName};

use super::preferences::RecordPreferences;

/// Recording configuration.
///
/// Immutable once built. Every instance has a non-empty file name,
/// directory name and directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordConfig {
    file_name: String,
    dir_name: String,
    dir_path: String,
    show_seed: bool,
    show_phone_number: bool,
    audio_source: AudioSource,
    audio_encoder: AudioEncoder,
    output_format: OutputFormat,
}

impl RecordConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> RecordConfigBuilder {
        RecordConfigBuilder::new()
    }

    /// Resolve stored preferences over the defaults and validate the result
    pub fn from_preferences(prefs: &RecordPreferences) -> Result<Self, ConfigError> {
        let merged = RecordPreferences::defaults().merge(prefs.clone());

        Ok(Self {
            file_name: require_non_empty("file_name", merged.file_name)?,
            dir_name: require_non_empty("dir_name", merged.dir_name)?,
            dir_path: require_non_empty("dir_path", merged.dir_path)?,
            show_seed: merged.show_seed.unwrap_or(true),
            show_phone_number: merged.show_phone_number.unwrap_or(true),
            audio_source: merged.audio_source.unwrap_or(AudioSource::VoiceCommunication),
            audio_encoder: merged.audio_encoder.unwrap_or(AudioEncoder::AmrNb),
            output_format: merged.output_format.unwrap_or(OutputFormat::AmrNb),
        })
    }

    /// Convert to a complete preference set. `save_file` is left unset.
    pub fn to_preferences(&self) -> RecordPreferences {
        RecordPreferences {
            save_file: None,
            file_name: Some(self.file_name.clone()),
            dir_name: Some(self.dir_name.clone()),
            dir_path: Some(self.dir_path.clone()),
            show_seed: Some(self.show_seed),
            show_phone_number: Some(self.show_phone_number),
            audio_source: Some(self.audio_source),
            audio_encoder: Some(self.audio_encoder),
            output_format: Some(self.output_format),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn dir_path(&self) -> &str {
        &self.dir_path
    }

    pub fn show_seed(&self) -> bool {
        self.show_seed
    }

    pub fn show_phone_number(&self) -> bool {
        self.show_phone_number
    }

    pub fn audio_source(&self) -> AudioSource {
        self.audio_source
    }

    pub fn audio_encoder(&self) -> AudioEncoder {
        self.audio_encoder
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Directory recordings are written to
    pub fn record_dir(&self) -> PathBuf {
        PathBuf::from(&self.dir_path).join(&self.dir_name)
    }

    /// File name for a recording of a call in `direction` with `number`
    pub fn file_name_for(&self, direction: CallDirection, number: Option<&str>) -> RecordFileName {
        let seed = self.show_seed.then(|| direction.seed());
        let number = if self.show_phone_number { number } else { None };
        RecordFileName::new(&self.file_name, seed, number, self.output_format)
    }
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            file_name: super::preferences::DEFAULT_FILE_NAME.to_string(),
            dir_name: super::preferences::DEFAULT_DIR_NAME.to_string(),
            dir_path: super::preferences::default_dir_path(),
            show_seed: true,
            show_phone_number: true,
            audio_source: AudioSource::VoiceCommunication,
            audio_encoder: AudioEncoder::AmrNb,
            output_format: OutputFormat::AmrNb,
        }
    }
}

/// Builder for [`RecordConfig`].
///
/// Setters only touch the builder; nothing is validated or stored until
/// [`RecordConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RecordConfigBuilder {
    prefs: RecordPreferences,
}

impl RecordConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.prefs.file_name = Some(name.into());
        self
    }

    pub fn dir_name(mut self, name: impl Into<String>) -> Self {
        self.prefs.dir_name = Some(name.into());
        self
    }

    pub fn dir_path(mut self, path: impl Into<String>) -> Self {
        self.prefs.dir_path = Some(path.into());
        self
    }

    pub fn show_seed(mut self, show: bool) -> Self {
        self.prefs.show_seed = Some(show);
        self
    }

    pub fn show_phone_number(mut self, show: bool) -> Self {
        self.prefs.show_phone_number = Some(show);
        self
    }

    pub fn audio_source(mut self, source: AudioSource) -> Self {
        self.prefs.audio_source = Some(source);
        self
    }

    pub fn audio_encoder(mut self, encoder: AudioEncoder) -> Self {
        self.prefs.audio_encoder = Some(encoder);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.prefs.output_format = Some(format);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<RecordConfig, ConfigError> {
        RecordConfig::from_preferences(&self.prefs)
    }
}

/// Check a name or path setting: present and non-empty
pub fn require_non_empty(key: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::empty_argument(key)),
    }
}
