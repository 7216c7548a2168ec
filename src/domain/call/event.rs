//! Call lifecycle events

use std::fmt;

use chrono::{DateTime, Utc};

/// Direction of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallDirection {
    Incoming,
    Outgoing,
}

impl CallDirection {
    /// Session seed used in recording file names
    pub const fn seed(&self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seed())
    }
}

/// The call currently tracked by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSession {
    pub direction: CallDirection,
    pub start_time: DateTime<Utc>,
    pub phone_number: Option<String>,
}

/// Semantic call lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// The phone started ringing
    IncomingCallReceived {
        number: Option<String>,
        start: DateTime<Utc>,
    },
    /// A ringing call was picked up
    IncomingCallAnswered {
        number: Option<String>,
        start: DateTime<Utc>,
    },
    /// An answered incoming call hung up
    IncomingCallEnded {
        number: Option<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// The line went off hook without ringing first
    OutgoingCallStarted {
        number: Option<String>,
        start: DateTime<Utc>,
    },
    /// An outgoing call hung up
    OutgoingCallEnded {
        number: Option<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// The phone rang and was never answered
    MissedCall {
        number: Option<String>,
        start: DateTime<Utc>,
    },
}

impl CallEvent {
    /// Short name of the event kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IncomingCallReceived { .. } => "incoming-received",
            Self::IncomingCallAnswered { .. } => "incoming-answered",
            Self::IncomingCallEnded { .. } => "incoming-ended",
            Self::OutgoingCallStarted { .. } => "outgoing-started",
            Self::OutgoingCallEnded { .. } => "outgoing-ended",
            Self::MissedCall { .. } => "missed",
        }
    }

    /// Phone number attached to the event, if known
    pub fn number(&self) -> Option<&str> {
        match self {
            Self::IncomingCallReceived { number, .. }
            | Self::IncomingCallAnswered { number, .. }
            | Self::IncomingCallEnded { number, .. }
            | Self::OutgoingCallStarted { number, .. }
            | Self::OutgoingCallEnded { number, .. }
            | Self::MissedCall { number, .. } => number.as_deref(),
        }
    }

    /// Start time of the call the event belongs to
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Self::IncomingCallReceived { start, .. }
            | Self::IncomingCallAnswered { start, .. }
            | Self::IncomingCallEnded { start, .. }
            | Self::OutgoingCallStarted { start, .. }
            | Self::OutgoingCallEnded { start, .. }
            | Self::MissedCall { start, .. } => *start,
        }
    }

    /// End time, only present on ended events
    pub fn end(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::IncomingCallEnded { end, .. } | Self::OutgoingCallEnded { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Direction of the call the event belongs to
    pub const fn direction(&self) -> CallDirection {
        match self {
            Self::OutgoingCallStarted { .. } | Self::OutgoingCallEnded { .. } => {
                CallDirection::Outgoing
            }
            _ => CallDirection::Incoming,
        }
    }
}

impl fmt::Display for CallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(number) = self.number() {
            write!(f, " {}", number)?;
        }
        if let Some(end) = self.end() {
            let secs = (end - self.start()).num_seconds();
            write!(f, " ({}s)", secs)?;
        }
        Ok(())
    }
}

/// Receiver of call lifecycle events.
///
/// Closures taking `&CallEvent` implement this trait, so a handler can be
/// registered without declaring a type.
pub trait CallEventHandler {
    fn handle(&mut self, event: &CallEvent);
}

impl<F> CallEventHandler for F
where
    F: FnMut(&CallEvent),
{
    fn handle(&mut self, event: &CallEvent) {
        self(event)
    }
}
