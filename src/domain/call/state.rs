//! Telephony call state

use std::fmt;

/// Raw state extra value for an idle line
pub const EXTRA_STATE_IDLE: &str = "IDLE";
/// Raw state extra value for an active (off hook) line
pub const EXTRA_STATE_OFFHOOK: &str = "OFFHOOK";
/// Raw state extra value for a ringing line
pub const EXTRA_STATE_RINGING: &str = "RINGING";

/// Line state as reported by the telephony layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallState {
    #[default]
    Idle,
    Ringing,
    Offhook,
}

impl CallState {
    /// Map a raw state extra to a call state.
    ///
    /// Matching is exact and case-sensitive. Anything that is not
    /// `OFFHOOK` or `RINGING` is treated as `Idle`.
    pub fn from_extra(extra: &str) -> Self {
        match extra {
            EXTRA_STATE_OFFHOOK => Self::Offhook,
            EXTRA_STATE_RINGING => Self::Ringing,
            _ => Self::Idle,
        }
    }

    /// Get the raw extra representation
    pub const fn as_extra(&self) -> &'static str {
        match self {
            Self::Idle => EXTRA_STATE_IDLE,
            Self::Ringing => EXTRA_STATE_RINGING,
            Self::Offhook => EXTRA_STATE_OFFHOOK,
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ringing => "ringing",
            Self::Offhook => "offhook",
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
