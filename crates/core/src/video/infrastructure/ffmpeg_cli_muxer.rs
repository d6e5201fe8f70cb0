use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::video::domain::audio_muxer::{AudioMuxer, MuxError};

/// Attaches an audio track to a silent video by running the system `ffmpeg`
/// binary.
///
/// The invocation is a plain argument vector — paths are never interpolated
/// into a shell command line — and runs non-interactively with errors-only
/// logging. A failed run leaves nothing at the output path.
pub struct FfmpegCliMuxer {
    ffmpeg: PathBuf,
}

impl FfmpegCliMuxer {
    pub fn new() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
        }
    }

    /// Use a specific ffmpeg binary instead of whatever is on PATH.
    pub fn with_binary(mut self, ffmpeg: impl Into<PathBuf>) -> Self {
        self.ffmpeg = ffmpeg.into();
        self
    }
}

impl Default for FfmpegCliMuxer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioMuxer for FfmpegCliMuxer {
    fn mux(&self, audio: &Path, silent_video: &Path, output: &Path) -> Result<(), MuxError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| MuxError::OutputDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        log::info!(
            "muxing {} + {} -> {}",
            audio.display(),
            silent_video.display(),
            output.display()
        );

        let result = Command::new(&self.ffmpeg)
            .arg("-loglevel")
            .arg("error")
            .arg("-y")
            .arg("-i")
            .arg(audio)
            .arg("-i")
            .arg(silent_video)
            .arg("-strict")
            .arg("-2")
            .arg("-q:v")
            .arg("1")
            .arg(output)
            .output()
            .map_err(|source| MuxError::Launch {
                tool: self.ffmpeg.clone(),
                source,
            })?;

        if !result.status.success() {
            // ffmpeg can leave a partial container behind when it aborts;
            // the output path must never hold a half-written deliverable.
            if output.exists() {
                let _ = fs::remove_file(output);
            }
            return Err(MuxError::CommandFailed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if !output.exists() {
            return Err(MuxError::MissingOutput {
                path: output.to_path_buf(),
            });
        }

        Ok(())
    }
}
