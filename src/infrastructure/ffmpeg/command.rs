use crate::config::settings::TranscoderConfig;
use crate::modules::rendition::service::EncodeJob;
use std::ffi::{OsStr, OsString};

/// Encoder settings shared by every rendition of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    pub program: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    pub pixel_format: String,
    pub log_level: String,
}

impl From<&TranscoderConfig> for EncoderSettings {
    fn from(config: &TranscoderConfig) -> Self {
        Self {
            program: config.ffmpeg_bin.clone(),
            video_codec: config.video_codec.clone(),
            audio_codec: config.audio_codec.clone(),
            audio_bitrate: config.audio_bitrate.clone(),
            pixel_format: config.pixel_format.clone(),
            log_level: config.ffmpeg_log_level.clone(),
        }
    }
}

impl EncoderSettings {
    /// Arguments for one ffmpeg run. Progress goes to stdout, logs to stderr.
    pub fn args(&self, job: &EncodeJob) -> Vec<OsString> {
        let profile = &job.profile;
        let mut args: Vec<OsString> = vec!["-hide_banner".into()];

        push_flag(&mut args, "-loglevel", &self.log_level);
        args.push("-y".into());
        push_flag(&mut args, "-i", &job.input);

        push_flag(&mut args, "-vf", profile.scale_filter());
        push_flag(&mut args, "-c:v", &self.video_codec);
        push_flag(&mut args, "-b:v", profile.video_bitrate());
        push_flag(&mut args, "-r", job.frame_rate.to_string());
        push_flag(&mut args, "-pix_fmt", &self.pixel_format);
        push_flag(&mut args, "-c:a", &self.audio_codec);
        push_flag(&mut args, "-b:a", &self.audio_bitrate);
        push_flag(&mut args, "-f", profile.container.format_name());
        push_flag(&mut args, "-progress", "pipe:1");

        args.push("-nostats".into());
        args.push(job.output.clone().into_os_string());
        args
    }
}

fn push_flag(args: &mut Vec<OsString>, flag: &str, value: impl AsRef<OsStr>) {
    args.push(flag.into());
    args.push(value.as_ref().to_os_string());
}
