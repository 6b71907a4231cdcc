use crate::config::settings::TranscoderConfig;
use crate::infrastructure::ffmpeg::command::EncoderSettings;
use crate::infrastructure::ffmpeg::encoder::FfmpegEncoder;
use crate::infrastructure::ffprobe::client::FfprobeClient;
use crate::state::AppState;
use tracing::info;

pub fn create_app(config: TranscoderConfig) -> AppState {
    let encoder = FfmpegEncoder::new(EncoderSettings::from(&config));
    let prober = FfprobeClient::new(&config.ffprobe_bin);

    info!(
        "Using {} ({} / {}, audio {})",
        encoder.settings().program,
        config.video_codec,
        config.audio_codec,
        config.audio_bitrate
    );

    AppState::new(config, encoder, prober)
}
