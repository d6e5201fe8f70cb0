use std::path::{Path, PathBuf};

use thiserror::Error;

/// Structured failure from the external mux tool.
///
/// A non-zero exit is reported as data, not a panic; the orchestrator
/// decides how to surface it.
#[derive(Error, Debug)]
pub enum MuxError {
    #[error("failed to launch mux tool {tool}: {source}")]
    Launch {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare output location {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited non-zero. `code` is `None` when killed by a signal.
    #[error("mux tool exited with code {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("mux tool exited successfully but produced no file at {path}")]
    MissingOutput { path: PathBuf },
}

/// Combines a silent video with an external audio track into one container.
///
/// Success means the tool exited zero AND the output file exists; on any
/// failure no file is left at the output path.
pub trait AudioMuxer: Send {
    fn mux(&self, audio: &Path, silent_video: &Path, output: &Path) -> Result<(), MuxError>;
}
