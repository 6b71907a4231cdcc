use crate::common::error::TranscodeError;
use crate::config::settings::FrameRate;
use crate::infrastructure::ffprobe::client::FfprobeClient;
use crate::modules::rendition::service::{Encoder, RenditionService};
use crate::state::AppState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub async fn run(
    state: &AppState,
    input: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, TranscodeError> {
    info!("🎥 Starting transcoder for {}", input.display());

    ensure_output_dir(output_dir)?;
    let frame_rate = probe_frame_rate(&state.prober, input, state.config.frame_rate).await;
    transcode_renditions(&state.encoder, input, output_dir, frame_rate).await
}

/// Produces every rendition in order. The first failure stops the run.
pub async fn transcode_renditions<E: Encoder>(
    encoder: &E,
    input: &Path,
    output_dir: &Path,
    frame_rate: f64,
) -> Result<Vec<PathBuf>, TranscodeError> {
    ensure_output_dir(output_dir)?;

    let jobs = RenditionService::plan(input, output_dir, frame_rate);
    let mut outputs = Vec::with_capacity(jobs.len());

    for job in &jobs {
        info!(
            "📦 Encoding {} ({}x{} @ {}, {})",
            job.profile.label(),
            job.profile.width,
            job.profile.height,
            job.profile.video_bitrate(),
            job.profile.container
        );

        if let Err(e) = encoder.encode(job).await {
            error!("❌ Failed to produce {}: {}", job.output.display(), e);
            return Err(e);
        }

        println!("Created: {}", job.output.display());
        outputs.push(job.output.clone());
    }

    info!("✅ All {} renditions completed", outputs.len());
    Ok(outputs)
}

fn ensure_output_dir(output_dir: &Path) -> Result<(), TranscodeError> {
    if !output_dir.exists() {
        info!("Creating output directory {}", output_dir.display());
    }
    fs::create_dir_all(output_dir).map_err(|source| TranscodeError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

async fn probe_frame_rate(prober: &FfprobeClient, input: &Path, frame_rate: FrameRate) -> f64 {
    match prober.probe(input).await {
        Ok(media) => frame_rate.resolve(media.frame_rate),
        Err(e) => {
            warn!("Could not probe input, continuing without it: {}", e);
            frame_rate.resolve(None)
        }
    }
}
