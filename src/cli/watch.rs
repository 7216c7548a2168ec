//! `watch` command: feed notifications to a receiver until input ends

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::application::ports::{AudioCapture, PreferenceStore};
use crate::application::{CallReceiver, CallRecord, RecordingController};
use crate::domain::call::Notification;
use crate::infrastructure::create_capture;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Options for the watch command
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    pub input: Option<PathBuf>,
    pub dry_run: bool,
}

/// Why the watch loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    EndOfInput,
    Interrupted,
}

/// Run the watch command
pub async fn run_watch<S: PreferenceStore>(
    options: WatchOptions,
    store: Arc<S>,
    presenter: &Presenter,
) -> ExitCode {
    let record = CallRecord::open(store);

    let config = match record.config() {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    match record.save_file_enabled() {
        Ok(true) => presenter.info(&format!(
            "Saving recordings to {}",
            config.record_dir().display()
        )),
        Ok(false) => presenter.info("Saving recordings is disabled"),
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    }
    if options.dry_run {
        presenter.info("Dry run, no audio will be captured");
    }

    let mut receiver = record.receiver(create_capture(options.dry_run));

    let result = match &options.input {
        Some(path) => match tokio::fs::File::open(path).await {
            Ok(file) => watch_loop(BufReader::new(file), &mut receiver, presenter).await,
            Err(e) => Err(e),
        },
        None => watch_loop(BufReader::new(io::stdin()), &mut receiver, presenter).await,
    };

    receiver.stop_listening();
    receiver.handler_mut().shutdown();

    match result {
        Ok(reason) => {
            debug!(?reason, "Watch stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to read notifications: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn watch_loop<R, S, C>(
    reader: R,
    receiver: &mut CallReceiver<RecordingController<S, C>>,
    presenter: &Presenter,
) -> io::Result<StopReason>
where
    R: AsyncBufRead + Unpin,
    S: PreferenceStore,
    C: AudioCapture,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let line = tokio::select! {
            _ = &mut ctrl_c => {
                info!("Interrupted");
                return Ok(StopReason::Interrupted);
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            return Ok(StopReason::EndOfInput);
        };
        line_number += 1;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Notification>() {
            Ok(notification) => {
                if let Some(event) = receiver.receive(&notification) {
                    presenter.event(&event);
                }
            }
            Err(e) => presenter.warn(&format!("Line {}: {}", line_number, e)),
        }
    }
}
