//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod capture;
pub mod preferences;

// Re-export common types
pub use capture::{AudioCapture, CaptureError, CaptureSession, CaptureSettings};
pub use preferences::PreferenceStore;
