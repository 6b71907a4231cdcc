use tracing::{debug, info};

const FRAME_LOG_INTERVAL: u64 = 100;

/// One meaningful line of ffmpeg `-progress` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Frame(u64),
    Continue,
    End,
}

impl ProgressEvent {
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.trim().split_once('=')?;
        match key.trim() {
            "frame" => value.trim().parse().ok().map(ProgressEvent::Frame),
            "progress" if value.trim() == "end" => Some(ProgressEvent::End),
            "progress" => Some(ProgressEvent::Continue),
            _ => None,
        }
    }
}

/// Follows the frame counter of a single encode.
#[derive(Debug)]
pub struct ProgressTracker {
    label: String,
    frames: u64,
    finished: bool,
}

impl ProgressTracker {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            frames: 0,
            finished: false,
        }
    }

    /// Returns the frame count when a 100-frame milestone was crossed.
    pub fn observe(&mut self, line: &str) -> Option<u64> {
        match ProgressEvent::parse(line)? {
            ProgressEvent::Frame(frame) => {
                let previous = self.frames;
                self.frames = frame.max(previous);
                if self.frames / FRAME_LOG_INTERVAL > previous / FRAME_LOG_INTERVAL {
                    info!("[{}] Processed video frames: {}", self.label, self.frames);
                    return Some(self.frames);
                }
                None
            }
            ProgressEvent::Continue => None,
            ProgressEvent::End => {
                self.finished = true;
                debug!("[{}] Encoder reported end of stream", self.label);
                None
            }
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}
