use super::command::EncoderSettings;
use crate::common::error::TranscodeError;
use crate::modules::rendition::progress::ProgressTracker;
use crate::modules::rendition::service::{EncodeJob, Encoder};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    settings: EncoderSettings,
}

impl FfmpegEncoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }
}

impl Encoder for FfmpegEncoder {
    async fn encode(&self, job: &EncodeJob) -> Result<(), TranscodeError> {
        let program = &self.settings.program;
        let args = self.settings.args(job);
        debug!("Running {} {:?}", program, args);

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| TranscodeError::Spawn {
                program: program.clone(),
                source,
            })?;

        let mut tracker = ProgressTracker::new(job.profile.label());
        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut line = Vec::new();
            loop {
                line.clear();
                let read = reader.read_until(b'\n', &mut line).await.map_err(|source| {
                    TranscodeError::Progress {
                        program: program.clone(),
                        source,
                    }
                })?;
                if read == 0 {
                    break;
                }
                tracker.observe(&String::from_utf8_lossy(&line));
            }
        }

        let status = child.wait().await.map_err(|source| TranscodeError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !status.success() {
            if !tracker.finished() {
                warn!("[{}] Encoder stopped before end of stream", job.profile.label());
            }
            return Err(TranscodeError::EncoderFailed {
                program: program.clone(),
                status,
                output: job.output.clone(),
            });
        }

        info!(
            "🎞️ {} finished after {} frames",
            job.profile.label(),
            tracker.frames()
        );
        Ok(())
    }
}
