//! Audio capture port interfaces

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::recording::{AudioEncoder, AudioSource, OutputFormat};

/// Audio capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Failed to create recordings directory {path}: {message}")]
    DirectoryFailed { path: PathBuf, message: String },

    #[error("Failed to create recording file: {0}")]
    FileFailed(String),

    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("Failed to stop capture: {0}")]
    StopFailed(String),

    #[error("Encoder not found. Please install {0}")]
    EncoderNotFound(String),
}

/// Everything the capture device needs to record one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    pub source: AudioSource,
    pub encoder: AudioEncoder,
    pub output_format: OutputFormat,
    pub output_path: PathBuf,
}

impl CaptureSettings {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Port for the audio capture device
pub trait AudioCapture: Send {
    /// Open a capture session and start writing to `settings.output_path`.
    ///
    /// # Returns
    /// The running session, owned by the caller until stopped
    fn open(&mut self, settings: &CaptureSettings) -> Result<Box<dyn CaptureSession>, CaptureError>;
}

impl AudioCapture for Box<dyn AudioCapture> {
    fn open(&mut self, settings: &CaptureSettings) -> Result<Box<dyn CaptureSession>, CaptureError> {
        (**self).open(settings)
    }
}

/// A running capture session
pub trait CaptureSession: Send {
    /// File the session is writing to
    fn output_path(&self) -> &Path;

    /// Stop capturing, flush the file and release the device.
    fn stop(self: Box<Self>) -> Result<(), CaptureError>;
}
