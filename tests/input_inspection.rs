//! Input inspection through stand-in ffprobe scripts. The scenarios share one
//! test so no other thread forks while a script is being written.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const RECORDING_FFMPEG: &str = r#"#!/bin/sh
prev=""
for arg in "$@"; do
    if [ "$prev" = "-r" ]; then
        echo "$arg" >> "$RATE_LOG"
    fi
    prev="$arg"
    last="$arg"
done
: > "$last"
"#;

const HEALTHY_FFPROBE: &str = r#"#!/bin/sh
if [ -d "$EXPECTED_OUTPUT_DIR" ]; then
    echo present > "$DIR_MARKER"
fi
cat <<'JSON'
{
  "streams": [
    {"codec_type": "video", "width": 1920, "height": 1080, "r_frame_rate": "30000/1001"},
    {"codec_type": "audio", "channels": 2, "sample_rate": "44100"}
  ],
  "format": {"format_name": "mov,mp4,m4a,3gp,3g2,mj2", "duration": "4.000000"}
}
JSON
"#;

const FAILING_FFPROBE: &str = r#"#!/bin/sh
echo "moov atom not found" >&2
exit 1
"#;

const GARBLED_FFPROBE: &str = r#"#!/bin/sh
echo "this is not json"
"#;

fn install_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

struct Scenario {
    root: PathBuf,
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
    frame_rate: Option<&'static str>,
}

impl Scenario {
    fn output_dir(&self) -> PathBuf {
        self.root.join("renders")
    }

    fn rate_log(&self) -> PathBuf {
        self.root.join("rates.log")
    }

    fn dir_marker(&self) -> PathBuf {
        self.root.join("dir-existed")
    }

    fn run(&self) -> Output {
        let input = self.root.join("input.mp4");
        fs::write(&input, b"stand-in input").unwrap();

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_videotranscoder"));
        cmd.arg(&input)
            .arg(self.output_dir())
            .env("TRANSCODER_FFMPEG_BIN", &self.ffmpeg)
            .env("TRANSCODER_FFPROBE_BIN", &self.ffprobe)
            .env("RATE_LOG", self.rate_log())
            .env("EXPECTED_OUTPUT_DIR", self.output_dir())
            .env("DIR_MARKER", self.dir_marker())
            .env("RUST_LOG", "info")
            .env("NO_COLOR", "1");
        match self.frame_rate {
            Some(rate) => cmd.env("TRANSCODER_FRAME_RATE", rate),
            None => cmd.env_remove("TRANSCODER_FRAME_RATE"),
        };
        cmd.output().unwrap()
    }

    fn recorded_rates(&self) -> Vec<f64> {
        fs::read_to_string(self.rate_log())
            .unwrap()
            .lines()
            .map(|line| line.trim().parse().unwrap())
            .collect()
    }
}

#[test]
fn input_inspection_drives_frame_rate_and_tolerates_failures() {
    let tmp = tempfile::tempdir().unwrap();
    let ffmpeg = install_script(tmp.path(), "ffmpeg", RECORDING_FFMPEG);
    let healthy = install_script(tmp.path(), "ffprobe-healthy", HEALTHY_FFPROBE);
    let failing = install_script(tmp.path(), "ffprobe-failing", FAILING_FFPROBE);
    let garbled = install_script(tmp.path(), "ffprobe-garbled", GARBLED_FFPROBE);

    let scenario = |name: &str, ffprobe: &Path, frame_rate: Option<&'static str>| {
        let root = tmp.path().join(name);
        fs::create_dir(&root).unwrap();
        Scenario {
            root,
            ffmpeg: ffmpeg.clone(),
            ffprobe: ffprobe.to_path_buf(),
            frame_rate,
        }
    };

    // Source rate is taken from the inspected stream, after the output dir exists.
    let source = scenario("source-rate", &healthy, Some("source"));
    let output = source.run();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("Input size: 1920x1080"), "{stderr}");
    assert!(stderr.contains("Audio channels: 2 sampleRate: 44100"), "{stderr}");
    let rates = source.recorded_rates();
    assert_eq!(rates.len(), 3);
    assert!(rates.iter().all(|r| (r - 29.97).abs() < 0.01), "{rates:?}");
    assert_eq!(fs::read_to_string(source.dir_marker()).unwrap().trim(), "present");

    // Default configuration keeps the fixed rate even when the stream reports another.
    let fixed = scenario("fixed-rate", &healthy, None);
    let output = fixed.run();
    assert!(output.status.success());
    assert_eq!(fixed.recorded_rates(), [25.0, 25.0, 25.0]);

    // A failing inspector is reported and the run continues at the fallback rate.
    let failed = scenario("failed", &failing, Some("source"));
    let output = failed.run();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("could not probe"), "{stderr}");
    assert!(stderr.contains("moov atom not found"), "{stderr}");
    assert_eq!(failed.recorded_rates(), [25.0, 25.0, 25.0]);

    // Output that is not JSON is reported the same way.
    let garbage = scenario("garbled", &garbled, Some("source"));
    let output = garbage.run();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("unreadable probe output"), "{stderr}");
    assert_eq!(garbage.recorded_rates(), [25.0, 25.0, 25.0]);
    assert_eq!(
        fs::read_dir(garbage.output_dir()).unwrap().count(),
        3,
        "all renditions still produced"
    );
}
