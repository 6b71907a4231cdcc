use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "videotranscoder", version)]
#[command(
    about = "Transcode a video into 1080p, 720p and 360p renditions with ffmpeg",
    long_about = None
)]
pub struct Args {
    /// Video file to transcode
    pub input_file: PathBuf,

    /// Directory receiving the renditions (created if missing)
    pub output_dir: PathBuf,
}
