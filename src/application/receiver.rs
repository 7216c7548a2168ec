//! Call notification receiver
//!
//! Boundary between the telephony notifications and the classifier.
//! Raw state strings are mapped here; events are handed to the registered
//! handler synchronously, in the order notifications arrive.

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::call::{CallEvent, CallEventHandler, CallState, CallStateClassifier, Notification};

/// Receiver errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiverError {
    #[error("Receiver is not listening")]
    NotListening,
}

/// Feeds notifications to a classifier and dispatches the resulting events
pub struct CallReceiver<H: CallEventHandler> {
    classifier: CallStateClassifier,
    handler: H,
    listening: bool,
}

impl<H: CallEventHandler> CallReceiver<H> {
    /// Create a receiver. It ignores notifications until
    /// [`CallReceiver::start_listening`] is called.
    pub fn new(handler: H) -> Self {
        Self::with_classifier(CallStateClassifier::new(), handler)
    }

    /// Create a receiver around an existing classifier
    pub fn with_classifier(classifier: CallStateClassifier, handler: H) -> Self {
        Self {
            classifier,
            handler,
            listening: false,
        }
    }

    /// Start accepting notifications
    pub fn start_listening(&mut self) {
        self.listening = true;
        debug!("Listening for call notifications");
    }

    /// Stop accepting notifications.
    /// Stopping a receiver that is not listening is ignored.
    pub fn stop_listening(&mut self) {
        if let Err(e) = self.unregister() {
            debug!(error = %e, "Ignoring stop request");
        }
    }

    /// Check if notifications are accepted
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn classifier(&self) -> &CallStateClassifier {
        &self.classifier
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Take the handler back, dropping the receiver
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Handle one notification.
    ///
    /// # Returns
    /// The event dispatched to the handler, if any
    pub fn receive(&mut self, notification: &Notification) -> Option<CallEvent> {
        if !self.listening {
            trace!(%notification, "Not listening, notification dropped");
            return None;
        }

        match notification {
            Notification::NewOutgoingCall { number } => {
                self.classifier.observe_raw_outgoing_number(number.as_str());
                None
            }
            Notification::PhoneState {
                state,
                incoming_number,
            } => {
                let state = CallState::from_extra(state);
                let event = self
                    .classifier
                    .observe_state(state, incoming_number.as_deref())?;
                debug!(event = event.name(), number = ?event.number(), "Call event");
                self.handler.handle(&event);
                Some(event)
            }
        }
    }

    fn unregister(&mut self) -> Result<(), ReceiverError> {
        if !self.listening {
            return Err(ReceiverError::NotListening);
        }
        self.listening = false;
        debug!("Stopped listening for call notifications");
        Ok(())
    }
}
