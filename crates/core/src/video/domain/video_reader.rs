use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// A source file that could not be opened for decoding.
#[derive(Error, Debug)]
#[error("failed to open media at {path}: {source}")]
pub struct MediaOpenError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl MediaOpenError {
    pub fn new(path: &Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Reads frames from a video source.
///
/// Implementations handle codec and container details; the pipeline works
/// with the abstract `Frame` and `VideoMetadata` types. A failed decode of
/// an individual frame is yielded as an `Err` item — the consumer decides
/// whether to stop or skip.
pub trait VideoReader: Send {
    /// Acquires the decoder and returns the stream's metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, MediaOpenError>;

    /// Returns a lazy iterator over frames in decode order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the decoder. Safe to call more than once.
    fn close(&mut self);
}
