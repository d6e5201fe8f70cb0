use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::composition::domain::side_by_side::{CompositionError, SideBySideCompositor};
use crate::shared::frame::Frame;
use crate::shared::frame_sequence::FrameSequence;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::audio_muxer::{AudioMuxer, MuxError};
use crate::video::domain::video_reader::{MediaOpenError, VideoReader};
use crate::video::domain::video_writer::{EncodeError, VideoWriter};

use super::pipeline_logger::{NullPipelineLogger, PipelineLogger};

/// The non-terminal stages of a comparison run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    ReadingBase,
    ReadingGenerated,
    Composing,
    Encoding,
    Muxing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ReadingBase => "reading base video",
            Stage::ReadingGenerated => "reading generated video",
            Stage::Composing => "composing",
            Stage::Encoding => "encoding",
            Stage::Muxing => "muxing",
        };
        f.write_str(name)
    }
}

/// A comparison run that ended in the failed state, tagged with the stage
/// it failed in. No stage retries; the first failure halts the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{stage} failed: {source}")]
    Open {
        stage: Stage,
        #[source]
        source: MediaOpenError,
    },

    #[error("{stage} produced no decodable frames from {path}")]
    NoFrames { stage: Stage, path: PathBuf },

    #[error("composing failed: {0}")]
    Compose(#[from] CompositionError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("encoding reported success but {path} does not exist")]
    MissingIntermediate { path: PathBuf },

    #[error("muxing failed: {0}")]
    Mux(#[from] MuxError),
}

impl PipelineError {
    /// The stage the run failed in.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Open { stage, .. } | PipelineError::NoFrames { stage, .. } => *stage,
            PipelineError::Compose(_) => Stage::Composing,
            PipelineError::Encode(_) | PipelineError::MissingIntermediate { .. } => Stage::Encoding,
            PipelineError::Mux(_) => Stage::Muxing,
        }
    }
}

/// Builds the side-by-side comparison deliverable.
///
/// Walks read base → read generated → compose → encode → mux, strictly in
/// that order and on the calling thread. Composing requires both reads to
/// have produced frames; muxing requires the encoded intermediate to exist
/// on disk. Any failure halts the run with the stage that caused it.
pub struct ComposeComparisonUseCase {
    base_reader: Box<dyn VideoReader>,
    generated_reader: Box<dyn VideoReader>,
    compositor: SideBySideCompositor,
    writer: Box<dyn VideoWriter>,
    muxer: Box<dyn AudioMuxer>,
    logger: Box<dyn PipelineLogger>,
}

impl ComposeComparisonUseCase {
    pub fn new(
        base_reader: Box<dyn VideoReader>,
        generated_reader: Box<dyn VideoReader>,
        writer: Box<dyn VideoWriter>,
        muxer: Box<dyn AudioMuxer>,
        logger: Option<Box<dyn PipelineLogger>>,
    ) -> Self {
        Self {
            base_reader,
            generated_reader,
            compositor: SideBySideCompositor::new(),
            writer,
            muxer,
            logger: logger.unwrap_or_else(|| Box::new(NullPipelineLogger)),
        }
    }

    /// Composes `base_video` and `generated_video` side by side into
    /// `intermediate`, then muxes `audio` onto it at `output`.
    ///
    /// The intermediate is encoded at the generated sequence's frame rate
    /// and may remain on disk after a failure; the final output path only
    /// ever holds a completed deliverable.
    pub fn execute(
        &mut self,
        base_video: &Path,
        generated_video: &Path,
        audio: &Path,
        intermediate: &Path,
        output: &Path,
    ) -> Result<(), PipelineError> {
        let t = Instant::now();
        let base = read_sequence(&mut *self.base_reader, base_video, Stage::ReadingBase)?;
        self.logger.timing("read_base", elapsed_ms(t));

        let t = Instant::now();
        let generated = read_sequence(
            &mut *self.generated_reader,
            generated_video,
            Stage::ReadingGenerated,
        )?;
        self.logger.timing("read_generated", elapsed_ms(t));

        let guards = [
            (&base, base_video, Stage::ReadingBase),
            (&generated, generated_video, Stage::ReadingGenerated),
        ];
        for (sequence, path, stage) in guards {
            if sequence.is_empty() {
                return Err(PipelineError::NoFrames {
                    stage,
                    path: path.to_path_buf(),
                });
            }
        }

        if let (Some((bw, bh)), Some((gw, gh))) = (base.dimensions(), generated.dimensions()) {
            self.logger.info(&format!(
                "composing {} generated frames ({gw}x{gh}) over {} base frames ({bw}x{bh})",
                generated.len(),
                base.len()
            ));
        }

        let t = Instant::now();
        let frames = self.compositor.compose(base.frames(), generated.frames())?;
        self.logger.timing("compose", elapsed_ms(t));

        let t = Instant::now();
        encode_sequence(
            &mut *self.writer,
            &mut *self.logger,
            &frames,
            generated.fps(),
            intermediate,
        )?;
        self.logger.timing("encode", elapsed_ms(t));

        if !intermediate.exists() {
            return Err(PipelineError::MissingIntermediate {
                path: intermediate.to_path_buf(),
            });
        }

        let t = Instant::now();
        self.muxer.mux(audio, intermediate, output)?;
        self.logger.timing("mux", elapsed_ms(t));

        self.logger
            .info(&format!("comparison video written to {}", output.display()));
        self.logger.summary();
        Ok(())
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Decodes a whole sequence, stopping at the first failed frame: a decode
/// error after a successful open keeps what was read instead of failing the
/// run. The reader is released on every path out.
fn read_sequence(
    reader: &mut dyn VideoReader,
    path: &Path,
    stage: Stage,
) -> Result<FrameSequence, PipelineError> {
    let metadata = reader
        .open(path)
        .map_err(|source| PipelineError::Open { stage, source })?;

    let mut frames: Vec<Frame> = Vec::new();
    for result in reader.frames() {
        match result {
            Ok(frame) => frames.push(frame),
            Err(e) => {
                log::warn!(
                    "{stage}: stopping after {} decoded frames: {e}",
                    frames.len()
                );
                break;
            }
        }
    }
    reader.close();

    Ok(FrameSequence::new(frames, metadata.fps))
}

/// Writes the composited frames as a silent video at `fps`.
///
/// A zero-frame request is refused before anything touches the filesystem;
/// the writer is closed on the failure path as well as the success path.
fn encode_sequence(
    writer: &mut dyn VideoWriter,
    logger: &mut dyn PipelineLogger,
    frames: &[Frame],
    fps: f64,
    path: &Path,
) -> Result<(), EncodeError> {
    let Some(first) = frames.first() else {
        return Err(EncodeError::EmptySequence {
            path: path.to_path_buf(),
        });
    };

    let backend = |e: Box<dyn std::error::Error>| EncodeError::Backend {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let metadata = VideoMetadata::for_encode(first.width(), first.height(), fps, frames.len());
    writer.open(path, &metadata).map_err(&backend)?;

    for (i, frame) in frames.iter().enumerate() {
        if let Err(e) = writer.write(frame) {
            let _ = writer.close();
            return Err(backend(e));
        }
        logger.progress(i + 1, frames.len());
    }

    writer.close().map_err(&backend)?;
    Ok(())
}
