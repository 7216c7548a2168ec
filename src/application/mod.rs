//! Application layer - Use cases and port interfaces
//!
//! Contains the call recording operations and trait definitions
//! for external system interactions.

pub mod call_record;
pub mod ports;
pub mod receiver;
pub mod recording;

// Re-export use cases
pub use call_record::CallRecord;
pub use receiver::{CallReceiver, ReceiverError};
pub use recording::{RecordingController, RecordingError};
