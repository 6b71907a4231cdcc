use serde::Deserialize;

/// Raw `ffprobe -print_format json -show_format -show_streams` document.
#[derive(Debug, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    pub format: Option<ProbeFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeStream {
    pub codec_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub r_frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub channels: Option<u32>,
    pub sample_rate: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeFormat {
    pub format_name: Option<String>,
    pub duration: Option<String>,
}

/// What the transcoder reports about its input before encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    pub format_name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub frame_rate: Option<f64>,
    pub audio_channels: Option<u32>,
    pub sample_rate: Option<u32>,
    pub duration_seconds: Option<f64>,
}

impl From<ProbeOutput> for MediaInfo {
    fn from(output: ProbeOutput) -> Self {
        let video = output
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"));
        let audio = output
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"));

        let frame_rate = video.and_then(|v| {
            v.r_frame_rate
                .as_deref()
                .and_then(parse_frame_rate)
                .or_else(|| v.avg_frame_rate.as_deref().and_then(parse_frame_rate))
        });

        let format = output.format.unwrap_or_default();

        MediaInfo {
            format_name: format.format_name.unwrap_or_else(|| "unknown".to_string()),
            width: video.and_then(|v| v.width),
            height: video.and_then(|v| v.height),
            frame_rate,
            audio_channels: audio.and_then(|a| a.channels),
            sample_rate: audio
                .and_then(|a| a.sample_rate.as_deref())
                .and_then(|r| r.parse().ok()),
            duration_seconds: format.duration.and_then(|d| d.parse().ok()),
        }
    }
}

/// Parses ffprobe rationals such as `30000/1001` or plain numbers.
pub fn parse_frame_rate(value: &str) -> Option<f64> {
    let fps = match value.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => value.trim().parse().ok()?,
    };
    (fps.is_finite() && fps > 0.0).then_some(fps)
}
