//! Raw telephony notifications

use std::fmt;
use std::str::FromStr;

use crate::domain::error::NotificationParseError;

/// Action of the "call state changed" broadcast
pub const ACTION_PHONE_STATE: &str = "android.intent.action.PHONE_STATE";
/// Action of the "new outgoing call" broadcast
pub const ACTION_NEW_OUTGOING_CALL: &str = "android.intent.action.NEW_OUTGOING_CALL";

/// A notification delivered by the telephony layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// An outgoing call is being placed to `number`
    NewOutgoingCall { number: String },
    /// The line state changed. `state` is the raw, unvalidated extra.
    PhoneState {
        state: String,
        incoming_number: Option<String>,
    },
}

impl FromStr for Notification {
    type Err = NotificationParseError;

    /// Parse a notification line.
    ///
    /// Supported forms:
    ///   `outgoing <number>`
    ///   `state <STATE> [number]`
    /// The full broadcast action names are accepted in place of
    /// `outgoing` and `state`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let action = tokens.next().ok_or(NotificationParseError::Empty)?;

        match action {
            "outgoing" | ACTION_NEW_OUTGOING_CALL => {
                let number = tokens.next().ok_or(NotificationParseError::MissingField {
                    action: "outgoing",
                    field: "phone number",
                })?;
                Ok(Self::NewOutgoingCall {
                    number: number.to_string(),
                })
            }
            "state" | ACTION_PHONE_STATE => {
                let state = tokens.next().ok_or(NotificationParseError::MissingField {
                    action: "state",
                    field: "state",
                })?;
                Ok(Self::PhoneState {
                    state: state.to_string(),
                    incoming_number: tokens.next().map(str::to_string),
                })
            }
            other => Err(NotificationParseError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewOutgoingCall { number } => write!(f, "outgoing {}", number),
            Self::PhoneState {
                state,
                incoming_number: Some(number),
            } => write!(f, "state {} {}", state, number),
            Self::PhoneState {
                state,
                incoming_number: None,
            } => write!(f, "state {}", state),
        }
    }
}
