use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReenactError {
    #[error("failed to launch reenactment tool {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare output location {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but never wrote its output file.
    #[error("reenactment run ({status}) produced no output at {path}")]
    NoOutput { path: PathBuf, status: String },
}

/// Boundary to the external face-reenactment tool.
///
/// The tool is opaque: given a face video and an audio track it either
/// writes a lip-synced video to `outfile` or fails by not producing the
/// file. Implementations judge success by the file's presence, not by the
/// tool's exit status.
pub trait FaceReenactor: Send {
    fn generate(&self, face: &Path, audio: &Path, outfile: &Path) -> Result<(), ReenactError>;
}
