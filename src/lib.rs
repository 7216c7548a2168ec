//! CallRecord - phone call state tracking and call recording
//!
//! This crate turns raw telephony notifications into call lifecycle events
//! (incoming received/answered/ended, outgoing started/ended, missed) and
//! records the audio of answered and outgoing calls.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Call state classifier, events, recording formats and preferences
//! - **Application**: Receiver, recording controller and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (TOML preferences, FFmpeg capture)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
