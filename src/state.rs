use crate::config::settings::TranscoderConfig;
use crate::infrastructure::ffmpeg::encoder::FfmpegEncoder;
use crate::infrastructure::ffprobe::client::FfprobeClient;

#[derive(Clone)]
pub struct AppState {
    pub config: TranscoderConfig,
    pub encoder: FfmpegEncoder,
    pub prober: FfprobeClient,
}

impl AppState {
    pub fn new(
        config: TranscoderConfig,
        encoder: FfmpegEncoder,
        prober: FfprobeClient,
    ) -> Self {
        Self {
            config,
            encoder,
            prober,
        }
    }
}
