//! Persisted recording preferences

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::recording::{AudioEncoder, AudioSource, OutputFormat};

/// Default base name of recording files
pub const DEFAULT_FILE_NAME: &str = "Record";

/// Default name of the recordings directory
pub const DEFAULT_DIR_NAME: &str = "CallRecord";

/// Directory the recordings directory is created in by default:
/// the user's audio directory, then the home directory, then the
/// working directory.
pub fn default_dir_path() -> String {
    dirs::audio_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}

/// Recording preferences as stored on disk.
/// All fields are optional to support partial files and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPreferences {
    pub save_file: Option<bool>,
    pub file_name: Option<String>,
    pub dir_name: Option<String>,
    pub dir_path: Option<String>,
    pub show_seed: Option<bool>,
    pub show_phone_number: Option<bool>,
    pub audio_source: Option<AudioSource>,
    pub audio_encoder: Option<AudioEncoder>,
    pub output_format: Option<OutputFormat>,
}

impl RecordPreferences {
    /// Create preferences with default values
    pub fn defaults() -> Self {
        Self {
            save_file: Some(true),
            file_name: Some(DEFAULT_FILE_NAME.to_string()),
            dir_name: Some(DEFAULT_DIR_NAME.to_string()),
            dir_path: Some(default_dir_path()),
            show_seed: Some(true),
            show_phone_number: Some(true),
            audio_source: Some(AudioSource::VoiceCommunication),
            audio_encoder: Some(AudioEncoder::AmrNb),
            output_format: Some(OutputFormat::AmrNb),
        }
    }

    /// Create empty preferences (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge with another set, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            save_file: other.save_file.or(self.save_file),
            file_name: other.file_name.or(self.file_name),
            dir_name: other.dir_name.or(self.dir_name),
            dir_path: other.dir_path.or(self.dir_path),
            show_seed: other.show_seed.or(self.show_seed),
            show_phone_number: other.show_phone_number.or(self.show_phone_number),
            audio_source: other.audio_source.or(self.audio_source),
            audio_encoder: other.audio_encoder.or(self.audio_encoder),
            output_format: other.output_format.or(self.output_format),
        }
    }

    /// Whether recordings should be saved. Unset means no.
    pub fn save_file_or_default(&self) -> bool {
        self.save_file.unwrap_or(false)
    }
}
