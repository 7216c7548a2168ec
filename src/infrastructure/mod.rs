//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like FFmpeg and the filesystem.

pub mod capture;
pub mod preferences;

// Re-export adapters
pub use capture::{create_capture, FfmpegCapture, NoOpCapture};
pub use preferences::{MemoryPreferenceStore, TomlPreferenceStore};
