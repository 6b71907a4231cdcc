use super::model::{RenditionProfile, DEFAULT_RENDITIONS};
use crate::common::error::TranscodeError;
use std::path::{Path, PathBuf};

/// A single rendition to produce from one input.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub profile: RenditionProfile,
    pub frame_rate: f64,
}

/// Runs one encode to completion.
pub trait Encoder {
    fn encode(&self, job: &EncodeJob) -> impl Future<Output = Result<(), TranscodeError>> + Send;
}

pub struct RenditionService;

impl RenditionService {
    pub fn plan(input: &Path, output_dir: &Path, frame_rate: f64) -> Vec<EncodeJob> {
        DEFAULT_RENDITIONS
            .iter()
            .map(|profile| EncodeJob {
                input: input.to_path_buf(),
                output: profile.output_path(output_dir),
                profile: *profile,
                frame_rate,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_one_job_per_rendition_in_order() {
        let jobs = RenditionService::plan(Path::new("in.mkv"), Path::new("renders"), 25.0);
        let outputs: Vec<PathBuf> = jobs.iter().map(|j| j.output.clone()).collect();
        assert_eq!(
            outputs,
            [
                Path::new("renders").join("output_1080p.mp4"),
                Path::new("renders").join("output_720p.mp4"),
                Path::new("renders").join("output_360p.3gp"),
            ]
        );
        assert!(jobs.iter().all(|j| j.input == Path::new("in.mkv") && j.frame_rate == 25.0));
    }
}
