use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Sequence-level encoding failure.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Asked to write zero frames; no file is created.
    #[error("refusing to encode an empty frame sequence to {path}")]
    EmptySequence { path: PathBuf },

    #[error("failed to encode video at {path}: {reason}")]
    Backend { path: PathBuf, reason: String },
}

/// Encodes frames into a video container.
///
/// `open` acquires the encoder (creating missing parent directories of the
/// target path); `close` drains and releases it, and must be called on both
/// success and failure paths.
pub trait VideoWriter: Send {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
