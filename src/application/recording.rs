//! Call recording use case

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::call::{CallDirection, CallEvent, CallEventHandler};
use crate::domain::config::RecordConfig;
use crate::domain::error::ConfigError;

use super::ports::{AudioCapture, CaptureError, CaptureSession, CaptureSettings, PreferenceStore};

/// Errors from starting a recording
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),
}

/// Starts and stops call recordings in response to call events.
///
/// Preferences are read again on every call, so changes made through
/// [`crate::application::CallRecord`] apply to the next call. Failures are
/// logged and never reach the caller.
pub struct RecordingController<S, C>
where
    S: PreferenceStore,
    C: AudioCapture,
{
    store: Arc<S>,
    capture: C,
    session: Option<Box<dyn CaptureSession>>,
}

impl<S, C> RecordingController<S, C>
where
    S: PreferenceStore,
    C: AudioCapture,
{
    /// Create a new controller with no recording in progress
    pub fn new(store: Arc<S>, capture: C) -> Self {
        Self {
            store,
            capture,
            session: None,
        }
    }

    /// Check if a recording is in progress
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// File the current recording is written to
    pub fn current_file(&self) -> Option<&Path> {
        self.session.as_ref().map(|s| s.output_path())
    }

    /// Start recording a call, if saving is enabled.
    ///
    /// A recording still in progress is stopped first.
    pub fn start_recording(&mut self, direction: CallDirection, number: Option<&str>) {
        if self.session.is_some() {
            warn!("Recording already in progress, stopping it before starting a new one");
            self.stop_recording();
        }

        match self.try_start(direction, number) {
            Ok(Some(path)) => info!(path = %path.display(), %direction, "Recording started"),
            Ok(None) => {}
            Err(e) => error!(error = %e, %direction, "Failed to start recording"),
        }
    }

    /// Stop the recording in progress. Does nothing if there is none.
    pub fn stop_recording(&mut self) {
        let Some(session) = self.session.take() else {
            debug!("No recording in progress");
            return;
        };

        let path = session.output_path().to_path_buf();
        match session.stop() {
            Ok(()) => info!(path = %path.display(), "Recording stopped"),
            Err(e) => error!(error = %e, path = %path.display(), "Failed to stop recording"),
        }
    }

    /// Release the capture device, e.g. before exiting
    pub fn shutdown(&mut self) {
        if self.session.is_some() {
            info!("Stopping recording on shutdown");
            self.stop_recording();
        }
    }

    fn try_start(
        &mut self,
        direction: CallDirection,
        number: Option<&str>,
    ) -> Result<Option<PathBuf>, RecordingError> {
        let prefs = self.store.load()?;
        debug!(save_file = prefs.save_file_or_default(), "Read save flag");
        if !prefs.save_file_or_default() {
            return Ok(None);
        }

        let config = RecordConfig::from_preferences(&prefs)?;
        let output_path = create_record_file(&config, direction, number)?;

        let settings = CaptureSettings {
            source: config.audio_source(),
            encoder: config.audio_encoder(),
            output_format: config.output_format(),
            output_path: output_path.clone(),
        };

        match self.capture.open(&settings) {
            Ok(session) => {
                self.session = Some(session);
                Ok(Some(output_path))
            }
            Err(e) => {
                let _ = fs::remove_file(&output_path);
                Err(e.into())
            }
        }
    }
}

impl<S, C> CallEventHandler for RecordingController<S, C>
where
    S: PreferenceStore,
    C: AudioCapture,
{
    fn handle(&mut self, event: &CallEvent) {
        match event {
            CallEvent::IncomingCallAnswered { number, .. } => {
                self.start_recording(CallDirection::Incoming, number.as_deref())
            }
            CallEvent::OutgoingCallStarted { number, .. } => {
                self.start_recording(CallDirection::Outgoing, number.as_deref())
            }
            CallEvent::IncomingCallEnded { .. } | CallEvent::OutgoingCallEnded { .. } => {
                self.stop_recording()
            }
            CallEvent::IncomingCallReceived { .. } | CallEvent::MissedCall { .. } => {}
        }
    }
}

impl<S, C> Drop for RecordingController<S, C>
where
    S: PreferenceStore,
    C: AudioCapture,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Create the recordings directory and a new, uniquely named file in it
fn create_record_file(
    config: &RecordConfig,
    direction: CallDirection,
    number: Option<&str>,
) -> Result<PathBuf, CaptureError> {
    let dir = config.record_dir();
    fs::create_dir_all(&dir).map_err(|e| CaptureError::DirectoryFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;

    let name = config.file_name_for(direction, number);
    if name.prefix().chars().any(std::path::is_separator) {
        return Err(CaptureError::FileFailed(format!(
            "file name {} contains a path separator",
            name
        )));
    }

    let file = tempfile::Builder::new()
        .prefix(name.prefix())
        .suffix(name.suffix())
        .tempfile_in(&dir)
        .map_err(|e| CaptureError::FileFailed(e.to_string()))?;

    let (_, path) = file
        .keep()
        .map_err(|e| CaptureError::FileFailed(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::RecordPreferences;
    use crate::domain::recording::OutputFormat;
    use crate::infrastructure::MemoryPreferenceStore;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureLog {
        opened: Vec<CaptureSettings>,
        stopped: Vec<PathBuf>,
    }

    struct MockCapture {
        log: Arc<Mutex<CaptureLog>>,
        fail: bool,
    }

    struct MockSession {
        path: PathBuf,
        log: Arc<Mutex<CaptureLog>>,
    }

    impl AudioCapture for MockCapture {
        fn open(
            &mut self,
            settings: &CaptureSettings,
        ) -> Result<Box<dyn CaptureSession>, CaptureError> {
            if self.fail {
                return Err(CaptureError::StartFailed("device busy".to_string()));
            }
            self.log.lock().unwrap().opened.push(settings.clone());
            Ok(Box::new(MockSession {
                path: settings.output_path.clone(),
                log: Arc::clone(&self.log),
            }))
        }
    }

    impl CaptureSession for MockSession {
        fn output_path(&self) -> &Path {
            &self.path
        }

        fn stop(self: Box<Self>) -> Result<(), CaptureError> {
            self.log.lock().unwrap().stopped.push(self.path.clone());
            Ok(())
        }
    }

    fn setup(
        dir: &Path,
        save_file: bool,
        fail: bool,
    ) -> (
        RecordingController<MemoryPreferenceStore, MockCapture>,
        Arc<Mutex<CaptureLog>>,
    ) {
        let prefs = RecordPreferences {
            save_file: Some(save_file),
            dir_path: Some(dir.to_string_lossy().to_string()),
            ..RecordPreferences::defaults()
        };
        setup_with(prefs, fail)
    }

    fn setup_with(
        prefs: RecordPreferences,
        fail: bool,
    ) -> (
        RecordingController<MemoryPreferenceStore, MockCapture>,
        Arc<Mutex<CaptureLog>>,
    ) {
        let store = Arc::new(MemoryPreferenceStore::with_preferences(prefs));
        let log = Arc::new(Mutex::new(CaptureLog::default()));
        let capture = MockCapture {
            log: Arc::clone(&log),
            fail,
        };
        (RecordingController::new(store, capture), log)
    }

    #[test]
    fn answered_call_starts_recording() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);

        controller.handle(&CallEvent::IncomingCallAnswered {
            number: Some("555".to_string()),
            start: Utc::now(),
        });

        assert!(controller.is_recording());
        let path = controller.current_file().unwrap().to_path_buf();
        assert!(path.starts_with(dir.path().join("CallRecord")));
        assert!(path.exists());

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Record_incoming_555_"), "{}", name);
        assert!(name.ends_with(".amr"), "{}", name);

        let log = log.lock().unwrap();
        assert_eq!(log.opened.len(), 1);
        assert_eq!(log.opened[0].output_format, OutputFormat::AmrNb);
    }

    #[test]
    fn ended_call_stops_recording() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);
        let start = Utc::now();

        controller.handle(&CallEvent::OutgoingCallStarted {
            number: Some("777".to_string()),
            start,
        });
        let path = controller.current_file().unwrap().to_path_buf();
        controller.handle(&CallEvent::OutgoingCallEnded {
            number: Some("777".to_string()),
            start,
            end: Utc::now(),
        });

        assert!(!controller.is_recording());
        assert_eq!(log.lock().unwrap().stopped, vec![path]);
    }

    #[test]
    fn end_without_recording_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);
        let now = Utc::now();

        controller.handle(&CallEvent::IncomingCallEnded {
            number: None,
            start: now,
            end: now,
        });

        assert!(!controller.is_recording());
        assert!(log.lock().unwrap().stopped.is_empty());
    }

    #[test]
    fn save_disabled_records_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), false, false);

        controller.start_recording(CallDirection::Incoming, Some("555"));

        assert!(!controller.is_recording());
        assert!(log.lock().unwrap().opened.is_empty());
        assert!(!dir.path().join("CallRecord").exists());
    }

    #[test]
    fn capture_failure_is_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, _log) = setup(dir.path(), true, true);

        controller.start_recording(CallDirection::Outgoing, Some("777"));

        assert!(!controller.is_recording());
        let leftovers = fs::read_dir(dir.path().join("CallRecord")).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn second_start_stops_first_session() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);

        controller.start_recording(CallDirection::Incoming, Some("1"));
        let first = controller.current_file().unwrap().to_path_buf();
        controller.start_recording(CallDirection::Incoming, Some("2"));
        let second = controller.current_file().unwrap().to_path_buf();

        assert_ne!(first, second);
        let log = log.lock().unwrap();
        assert_eq!(log.opened.len(), 2);
        assert_eq!(log.stopped, vec![first]);
    }

    #[test]
    fn ringing_and_missed_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);
        let now = Utc::now();

        controller.handle(&CallEvent::IncomingCallReceived {
            number: Some("555".to_string()),
            start: now,
        });
        controller.handle(&CallEvent::MissedCall {
            number: Some("555".to_string()),
            start: now,
        });

        assert!(log.lock().unwrap().opened.is_empty());
    }

    #[test]
    fn shutdown_releases_session() {
        let dir = tempfile::tempdir().unwrap();
        let (mut controller, log) = setup(dir.path(), true, false);

        controller.start_recording(CallDirection::Outgoing, None);
        controller.shutdown();

        assert!(!controller.is_recording());
        assert_eq!(log.lock().unwrap().stopped.len(), 1);
    }

    #[test]
    fn nested_dir_name_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = RecordPreferences {
            dir_path: Some(dir.path().to_string_lossy().to_string()),
            dir_name: Some("Calls/2024".to_string()),
            ..RecordPreferences::defaults()
        };
        let (mut controller, _log) = setup_with(prefs, false);

        controller.start_recording(CallDirection::Incoming, Some("555"));

        let path = controller.current_file().unwrap().to_path_buf();
        assert_eq!(path.parent(), Some(dir.path().join("Calls/2024").as_path()));
    }

    #[test]
    fn separator_in_file_name_fails_at_creation() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = RecordPreferences {
            dir_path: Some(dir.path().to_string_lossy().to_string()),
            file_name: Some("a/b".to_string()),
            ..RecordPreferences::defaults()
        };
        let (mut controller, log) = setup_with(prefs, false);

        controller.start_recording(CallDirection::Outgoing, Some("777"));

        assert!(!controller.is_recording());
        assert!(log.lock().unwrap().opened.is_empty());
        let leftovers = fs::read_dir(dir.path().join("CallRecord")).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
