//! Recording configuration

pub mod preferences;
pub mod record_config;

pub use preferences::RecordPreferences;
pub use record_config::{require_non_empty, RecordConfig, RecordConfigBuilder};
