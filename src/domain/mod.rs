//! Domain layer - Core business logic
//!
//! Contains the call state classifier, value objects and domain errors.
//! This layer performs no file or device I/O.

pub mod call;
pub mod config;
pub mod error;
pub mod recording;

// Re-export common types
pub use call::{
    CallDirection, CallEvent, CallEventHandler, CallState, CallStateClassifier, Notification,
};
pub use config::{RecordConfig, RecordPreferences};
pub use error::*;
pub use recording::{AudioEncoder, AudioSource, OutputFormat, RecordFileName};
