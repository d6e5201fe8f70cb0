use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::reenact::domain::reenactor::{FaceReenactor, ReenactError};
use crate::shared::run_layout::RunLayout;

use super::compose_comparison_use_case::{ComposeComparisonUseCase, PipelineError};
use super::inputs::{resolve_input, InputError};

#[derive(Error, Debug)]
pub enum LipsyncError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("face reenactment failed: {0}")]
    Reenact(#[from] ReenactError),

    #[error(transparent)]
    Compose(#[from] PipelineError),
}

/// End-to-end lip-sync run: validate inputs, generate the lip-synced video
/// through the external tool, then build the side-by-side comparison.
///
/// All artifact locations come from the `RunLayout`; nothing here depends
/// on the process working directory.
pub struct RunLipsyncUseCase {
    reenactor: Box<dyn FaceReenactor>,
    compose: ComposeComparisonUseCase,
}

impl RunLipsyncUseCase {
    pub fn new(reenactor: Box<dyn FaceReenactor>, compose: ComposeComparisonUseCase) -> Self {
        Self { reenactor, compose }
    }

    /// Runs the full pipeline and returns the path of the final comparison
    /// video.
    pub fn execute(
        &mut self,
        face_video: &Path,
        audio: &Path,
        layout: &RunLayout,
    ) -> Result<PathBuf, LipsyncError> {
        let face = resolve_input(face_video)?;
        let audio = resolve_input(audio)?;
        log::info!("face video: {}", face.display());
        log::info!("audio track: {}", audio.display());

        let generated = layout.generated_video();
        self.reenactor.generate(&face, &audio, &generated)?;

        let output = layout.comparison_video();
        self.compose.execute(
            &face,
            &generated,
            &audio,
            &layout.concat_scratch(),
            &output,
        )?;

        Ok(output)
    }
}
