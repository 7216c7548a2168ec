//! Call state and lifecycle events

pub mod classifier;
pub mod event;
pub mod notification;
pub mod state;

pub use classifier::CallStateClassifier;
pub use event::{CallDirection, CallEvent, CallEventHandler, CallSession};
pub use notification::Notification;
pub use state::CallState;
