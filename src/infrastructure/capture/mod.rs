//! Audio capture adapters

mod ffmpeg;
mod noop;

pub use ffmpeg::FfmpegCapture;
pub use noop::NoOpCapture;

use crate::application::ports::AudioCapture;

/// Create the capture used by the CLI
pub fn create_capture(dry_run: bool) -> Box<dyn AudioCapture> {
    if dry_run {
        Box::new(NoOpCapture::new())
    } else {
        Box::new(FfmpegCapture::new())
    }
}
