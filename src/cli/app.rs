//! Shared setup for the CLI commands

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::infrastructure::TomlPreferenceStore;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Install the log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or
/// debug output for this crate with `verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "call_record=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Open the preference store at `path`, or at the default location
pub fn open_store(path: Option<PathBuf>) -> Arc<TomlPreferenceStore> {
    let store = match path {
        Some(path) => TomlPreferenceStore::with_path(path),
        None => TomlPreferenceStore::new(),
    };
    Arc::new(store)
}
