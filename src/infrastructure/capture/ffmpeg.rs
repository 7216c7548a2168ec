//! FFmpeg-based call capture adapter

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::application::ports::{AudioCapture, CaptureError, CaptureSession, CaptureSettings};
use crate::domain::recording::{AudioEncoder, OutputFormat};

/// How long ffmpeg gets to finalize the file after SIGINT
const STOP_TIMEOUT: Duration = Duration::from_secs(5);
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captures call audio by running `ffmpeg` against a PulseAudio source
pub struct FfmpegCapture {
    /// PulseAudio source name
    input: String,
}

impl FfmpegCapture {
    /// Create a capture reading the default PulseAudio source
    pub fn new() -> Self {
        Self::with_input("default")
    }

    /// Create a capture reading a specific PulseAudio source
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build FFmpeg args for recording
    fn build_ffmpeg_args(&self, settings: &CaptureSettings) -> Vec<String> {
        let codec = codec_name(settings.encoder, settings.output_format);
        let sample_rate = match codec {
            "libopencore_amrnb" => "8000",
            _ => "16000",
        };

        let mut args = vec![
            "-f".to_string(),
            "pulse".to_string(),
            "-i".to_string(),
            self.input.clone(),
            "-ar".to_string(),
            sample_rate.to_string(),
            "-ac".to_string(),
            "1".to_string(),
            "-c:a".to_string(),
            codec.to_string(),
        ];

        if codec == "libopus" {
            args.extend(["-application".to_string(), "voip".to_string()]);
        }

        args.extend([
            "-f".to_string(),
            muxer_name(settings.output_format).to_string(),
            "-y".to_string(),
            settings.output_path.to_string_lossy().to_string(),
        ]);

        args
    }

    fn spawn_ffmpeg(args: &[String]) -> Result<Child, CaptureError> {
        Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CaptureError::EncoderNotFound("ffmpeg".to_string())
                } else {
                    CaptureError::StartFailed(e.to_string())
                }
            })
    }
}

impl Default for FfmpegCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCapture for FfmpegCapture {
    fn open(&mut self, settings: &CaptureSettings) -> Result<Box<dyn CaptureSession>, CaptureError> {
        let args = self.build_ffmpeg_args(settings);
        debug!(source = %settings.source, args = ?args, "Spawning ffmpeg");

        let mut child = Self::spawn_ffmpeg(&args)?;

        if let Ok(Some(status)) = child.try_wait() {
            return Err(CaptureError::StartFailed(format!(
                "ffmpeg exited immediately with {}",
                status
            )));
        }

        Ok(Box::new(FfmpegSession {
            child: Some(child),
            output_path: settings.output_path.clone(),
        }))
    }
}

/// A running ffmpeg process writing one recording
struct FfmpegSession {
    child: Option<Child>,
    output_path: PathBuf,
}

impl FfmpegSession {
    /// Ask ffmpeg to finish the file and exit
    #[cfg(unix)]
    fn interrupt(child: &mut Child) -> Result<(), CaptureError> {
        use nix::sys::signal::{self, Signal};
        use nix::unistd::Pid;

        signal::kill(Pid::from_raw(child.id() as i32), Signal::SIGINT)
            .map_err(|e| CaptureError::StopFailed(format!("Signal failed: {}", e)))
    }

    #[cfg(not(unix))]
    fn interrupt(child: &mut Child) -> Result<(), CaptureError> {
        child
            .kill()
            .map_err(|e| CaptureError::StopFailed(e.to_string()))
    }
}

impl CaptureSession for FfmpegSession {
    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn stop(mut self: Box<Self>) -> Result<(), CaptureError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        if let Err(e) = Self::interrupt(&mut child) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }

        // ffmpeg reports a non-zero status when interrupted, so only
        // failing to reap it is an error
        let status = wait_or_kill(&mut child, STOP_TIMEOUT)?;
        debug!(%status, "ffmpeg exited");
        Ok(())
    }
}

/// Wait up to `timeout` for the child to exit, then kill it
fn wait_or_kill(child: &mut Child, timeout: Duration) -> Result<ExitStatus, CaptureError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if Instant::now() >= deadline => break,
            Ok(None) => thread::sleep(STOP_POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CaptureError::StopFailed(format!("ffmpeg failed: {}", e)));
            }
        }
    }

    warn!(timeout_ms = timeout.as_millis() as u64, "ffmpeg did not exit in time, killing it");
    let _ = child.kill();
    child
        .wait()
        .map_err(|e| CaptureError::StopFailed(format!("ffmpeg failed: {}", e)))
}

impl Drop for FfmpegSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            warn!(path = %self.output_path.display(), "Capture dropped while running, killing ffmpeg");
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// FFmpeg audio codec for an encoder. The platform default encoder
/// follows the container.
fn codec_name(encoder: AudioEncoder, format: OutputFormat) -> &'static str {
    match encoder {
        AudioEncoder::AmrNb => "libopencore_amrnb",
        AudioEncoder::AmrWb => "libvo_amrwbenc",
        AudioEncoder::Aac | AudioEncoder::HeAac | AudioEncoder::AacEld => "aac",
        AudioEncoder::Vorbis => "libvorbis",
        AudioEncoder::Opus => "libopus",
        AudioEncoder::Default => match format {
            OutputFormat::AmrWb => "libvo_amrwbenc",
            OutputFormat::Mpeg4 | OutputFormat::AacAdts => "aac",
            OutputFormat::Webm => "libopus",
            OutputFormat::Ogg => "libvorbis",
            OutputFormat::Default | OutputFormat::ThreeGpp | OutputFormat::AmrNb => {
                "libopencore_amrnb"
            }
        },
    }
}

/// FFmpeg muxer for a container format
fn muxer_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::ThreeGpp => "3gp",
        OutputFormat::Mpeg4 => "mp4",
        OutputFormat::AacAdts => "adts",
        OutputFormat::Webm => "webm",
        OutputFormat::Ogg => "ogg",
        OutputFormat::Default | OutputFormat::AmrNb | OutputFormat::AmrWb => "amr",
    }
}
