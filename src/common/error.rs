use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status} while producing {output}")]
    EncoderFailed {
        program: String,
        status: ExitStatus,
        output: PathBuf,
    },

    #[error("failed to read progress from {program}: {source}")]
    Progress {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} could not probe {input}: {message}")]
    ProbeFailed {
        program: String,
        input: PathBuf,
        message: String,
    },

    #[error("unreadable probe output for {input}: {source}")]
    ProbeOutput {
        input: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
