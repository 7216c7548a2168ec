//! Call state classifier
//!
//! Turns the raw stream of line states into call lifecycle events.
//!
//! Transitions, keyed by (last state, new state):
//!   * -> RINGING             incoming call received
//!   RINGING -> OFFHOOK       incoming call answered
//!   IDLE -> OFFHOOK          outgoing call started
//!   RINGING -> IDLE          missed call
//!   OFFHOOK -> IDLE          incoming or outgoing call ended
//!
//! A state equal to the last observed one is dropped.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::event::{CallDirection, CallEvent, CallSession};
use super::state::CallState;

/// Call state classifier.
///
/// Holds the last observed line state, the call in progress and the number
/// announced by the last "new outgoing call" notification. Each instance is
/// independent; the caller must deliver notifications one at a time, in
/// order.
#[derive(Debug, Default)]
pub struct CallStateClassifier {
    last_state: CallState,
    session: Option<CallSession>,
    pending_outgoing_number: Option<String>,
}

impl CallStateClassifier {
    /// Create a classifier with an idle line
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the last observed state
    pub fn last_state(&self) -> CallState {
        self.last_state
    }

    /// Get the call in progress, if any
    pub fn session(&self) -> Option<&CallSession> {
        self.session.as_ref()
    }

    /// Get the outgoing number waiting for the line to go off hook
    pub fn pending_outgoing_number(&self) -> Option<&str> {
        self.pending_outgoing_number.as_deref()
    }

    /// Remember the number of an outgoing call that is being placed.
    /// A later call replaces an earlier one.
    pub fn observe_raw_outgoing_number(&mut self, number: impl Into<String>) {
        self.pending_outgoing_number = Some(number.into());
    }

    /// Observe a new line state at the current time
    pub fn observe_state(&mut self, state: CallState, number: Option<&str>) -> Option<CallEvent> {
        self.observe_state_at(state, number, Utc::now())
    }

    /// Observe a new line state at `now`.
    ///
    /// `number` is only used when the line starts ringing.
    pub fn observe_state_at(
        &mut self,
        state: CallState,
        number: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<CallEvent> {
        if state == self.last_state {
            return None;
        }

        let event = match state {
            CallState::Ringing => {
                let number = number.map(str::to_string);
                self.session = Some(CallSession {
                    direction: CallDirection::Incoming,
                    start_time: now,
                    phone_number: number.clone(),
                });
                Some(CallEvent::IncomingCallReceived { number, start: now })
            }
            CallState::Offhook if self.last_state == CallState::Ringing => {
                let number = match self.session.as_mut() {
                    Some(session) => {
                        session.start_time = now;
                        session.phone_number.clone()
                    }
                    None => None,
                };
                Some(CallEvent::IncomingCallAnswered { number, start: now })
            }
            CallState::Offhook => {
                let number = self.pending_outgoing_number.take();
                self.session = Some(CallSession {
                    direction: CallDirection::Outgoing,
                    start_time: now,
                    phone_number: number.clone(),
                });
                Some(CallEvent::OutgoingCallStarted { number, start: now })
            }
            CallState::Idle => match self.session.take() {
                Some(session) if self.last_state == CallState::Ringing => {
                    Some(CallEvent::MissedCall {
                        number: session.phone_number,
                        start: session.start_time,
                    })
                }
                Some(session) => match session.direction {
                    CallDirection::Incoming => Some(CallEvent::IncomingCallEnded {
                        number: session.phone_number,
                        start: session.start_time,
                        end: now,
                    }),
                    CallDirection::Outgoing => Some(CallEvent::OutgoingCallEnded {
                        number: session.phone_number,
                        start: session.start_time,
                        end: now,
                    }),
                },
                None => {
                    debug!(from = %self.last_state, "Line went idle with no call in progress");
                    None
                }
            },
        };

        self.last_state = state;
        event
    }
}
