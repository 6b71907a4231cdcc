use std::collections::HashMap;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    FfmpegBin,
    FfprobeBin,
    VideoCodec,
    AudioCodec,
    AudioBitrate,
    PixelFormat,
    FrameRate,
    FfmpegLogLevel,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::FfmpegBin => "TRANSCODER_FFMPEG_BIN",
            EnvKey::FfprobeBin => "TRANSCODER_FFPROBE_BIN",
            EnvKey::VideoCodec => "TRANSCODER_VIDEO_CODEC",
            EnvKey::AudioCodec => "TRANSCODER_AUDIO_CODEC",
            EnvKey::AudioBitrate => "TRANSCODER_AUDIO_BITRATE",
            EnvKey::PixelFormat => "TRANSCODER_PIXEL_FORMAT",
            EnvKey::FrameRate => "TRANSCODER_FRAME_RATE",
            EnvKey::FfmpegLogLevel => "TRANSCODER_FFMPEG_LOGLEVEL",
        }
    }
}

/// Where configuration values come from. The process environment in
/// production, a map in tests.
pub trait EnvSource {
    fn var(&self, key: EnvKey) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: EnvKey) -> Option<String> {
        env::var(key.as_str()).ok()
    }
}

impl EnvSource for HashMap<EnvKey, String> {
    fn var(&self, key: EnvKey) -> Option<String> {
        self.get(&key).cloned()
    }
}

pub fn get_or(source: &impl EnvSource, key: EnvKey, default: &str) -> String {
    source
        .var(key)
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(source: &impl EnvSource, key: EnvKey, default: T) -> T {
    match source.var(key) {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
