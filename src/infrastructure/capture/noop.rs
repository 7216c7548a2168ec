//! No-op capture adapter
//!
//! Used for dry runs. Recording files are still created, but nothing is
//! written to them.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::application::ports::{AudioCapture, CaptureError, CaptureSession, CaptureSettings};

/// Capture that opens no device
pub struct NoOpCapture;

impl NoOpCapture {
    /// Create a new no-op capture
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCapture for NoOpCapture {
    fn open(&mut self, settings: &CaptureSettings) -> Result<Box<dyn CaptureSession>, CaptureError> {
        info!(
            path = %settings.output_path.display(),
            source = %settings.source,
            encoder = %settings.encoder,
            format = %settings.output_format,
            "Dry run: capture not started"
        );
        Ok(Box::new(NoOpSession {
            output_path: settings.output_path.clone(),
        }))
    }
}

struct NoOpSession {
    output_path: PathBuf,
}

impl CaptureSession for NoOpSession {
    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn stop(self: Box<Self>) -> Result<(), CaptureError> {
        info!(path = %self.output_path.display(), "Dry run: capture stopped");
        Ok(())
    }
}
