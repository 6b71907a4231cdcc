use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use crate::config::env::{self, EnvKey, EnvSource, ProcessEnv};

pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// Output frame rate: a fixed value, or whatever the input reports.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub enum FrameRate {
    Fixed(f64),
    Source,
}

impl FrameRate {
    /// Falls back to 25 fps when the source rate is unknown.
    pub fn resolve(&self, probed: Option<f64>) -> f64 {
        match self {
            FrameRate::Fixed(fps) => *fps,
            FrameRate::Source => probed
                .filter(|fps| fps.is_finite() && *fps > 0.0)
                .unwrap_or(DEFAULT_FRAME_RATE),
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate::Fixed(DEFAULT_FRAME_RATE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrameRateError(String);

impl fmt::Display for ParseFrameRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid frame rate '{}'", self.0)
    }
}

impl std::error::Error for ParseFrameRateError {}

impl FromStr for FrameRate {
    type Err = ParseFrameRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("source") {
            return Ok(FrameRate::Source);
        }
        match s.parse::<f64>() {
            Ok(fps) if fps.is_finite() && fps > 0.0 => Ok(FrameRate::Fixed(fps)),
            _ => Err(ParseFrameRateError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TranscoderConfig {
    pub ffmpeg_bin: String,
    pub ffprobe_bin: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    pub pixel_format: String,
    pub frame_rate: FrameRate,
    pub ffmpeg_log_level: String,
}

impl TranscoderConfig {
    pub fn new() -> Self {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            ffmpeg_bin: env::get_or(source, EnvKey::FfmpegBin, "ffmpeg"),
            ffprobe_bin: env::get_or(source, EnvKey::FfprobeBin, "ffprobe"),
            video_codec: env::get_or(source, EnvKey::VideoCodec, "libx264"),
            audio_codec: env::get_or(source, EnvKey::AudioCodec, "aac"),
            audio_bitrate: env::get_or(source, EnvKey::AudioBitrate, "128k"),
            pixel_format: env::get_or(source, EnvKey::PixelFormat, "yuv420p"),
            frame_rate: env::get_parsed(source, EnvKey::FrameRate, FrameRate::default()),
            ffmpeg_log_level: env::get_or(source, EnvKey::FfmpegLogLevel, "info"),
        }
    }
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self::from_source(&HashMap::<EnvKey, String>::new())
    }
}
