use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Mp4,
    ThreeGp,
}

impl Container {
    /// Muxer name passed to `-f`.
    pub fn format_name(&self) -> &'static str {
        match self {
            Container::Mp4 => "mp4",
            Container::ThreeGp => "3gp",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenditionProfile {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub video_bitrate_kbps: u32,
    pub container: Container,
}

impl RenditionProfile {
    pub fn video_bitrate(&self) -> String {
        format!("{}k", self.video_bitrate_kbps)
    }

    pub fn scale_filter(&self) -> String {
        format!("scale={}:{}", self.width, self.height)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }

    pub fn label(&self) -> String {
        format!("{}p", self.height)
    }
}

pub const DEFAULT_RENDITIONS: [RenditionProfile; 3] = [
    RenditionProfile {
        file_name: "output_1080p.mp4",
        width: 1920,
        height: 1080,
        video_bitrate_kbps: 6000,
        container: Container::Mp4,
    },
    RenditionProfile {
        file_name: "output_720p.mp4",
        width: 1280,
        height: 720,
        video_bitrate_kbps: 3000,
        container: Container::Mp4,
    },
    RenditionProfile {
        file_name: "output_360p.3gp",
        width: 640,
        height: 360,
        video_bitrate_kbps: 600,
        container: Container::ThreeGp,
    },
];
