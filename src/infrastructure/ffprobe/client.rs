use crate::common::error::TranscodeError;
use crate::modules::probe::model::{MediaInfo, ProbeOutput};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

#[derive(Debug, Clone)]
pub struct FfprobeClient {
    program: String,
}

impl FfprobeClient {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub async fn probe(&self, input: &Path) -> Result<MediaInfo, TranscodeError> {
        let output = Command::new(&self.program)
            .args(["-v", "error", "-print_format", "json", "-show_format", "-show_streams"])
            .arg(input)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TranscodeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TranscodeError::ProbeFailed {
                program: self.program.clone(),
                input: input.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let parsed: ProbeOutput =
            serde_json::from_slice(&output.stdout).map_err(|source| TranscodeError::ProbeOutput {
                input: input.to_path_buf(),
                source,
            })?;
        let media = MediaInfo::from(parsed);

        info!("Input format: {}", media.format_name);
        if let (Some(width), Some(height)) = (media.width, media.height) {
            info!("Input size: {}x{}", width, height);
        }
        if let Some(fps) = media.frame_rate {
            info!("Input fps: {:.3}", fps);
        }
        if let Some(duration) = media.duration_seconds {
            info!("Input duration: {:.2}s", duration);
        }
        if let Some(channels) = media.audio_channels {
            info!(
                "Audio channels: {} sampleRate: {}",
                channels,
                media.sample_rate.unwrap_or_default()
            );
        }

        Ok(media)
    }
}
