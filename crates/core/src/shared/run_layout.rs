use std::path::{Path, PathBuf};

use crate::shared::constants::{
    COMPARISON_VIDEO_NAME, CONCAT_SCRATCH_NAME, GENERATED_VIDEO_NAME, RESULTS_DIR, SCRATCH_DIR,
};

/// Well-known artifact locations under an explicit run root.
///
/// Every component receives the paths it needs as parameters; nothing in the
/// pipeline changes the process working directory.
#[derive(Clone, Debug)]
pub struct RunLayout {
    root: PathBuf,
}

impl RunLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the reenactment tool is asked to write its output.
    pub fn generated_video(&self) -> PathBuf {
        self.root.join(RESULTS_DIR).join(GENERATED_VIDEO_NAME)
    }

    /// The final muxed deliverable.
    pub fn comparison_video(&self) -> PathBuf {
        self.root.join(RESULTS_DIR).join(COMPARISON_VIDEO_NAME)
    }

    /// The silent composited intermediate.
    pub fn concat_scratch(&self) -> PathBuf {
        self.root.join(SCRATCH_DIR).join(CONCAT_SCRATCH_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_root() {
        let layout = RunLayout::new("/work/run1");
        assert_eq!(
            layout.generated_video(),
            PathBuf::from("/work/run1/results/output.mp4")
        );
        assert_eq!(
            layout.comparison_video(),
            PathBuf::from("/work/run1/results/output_concat_input.mp4")
        );
        assert_eq!(
            layout.concat_scratch(),
            PathBuf::from("/work/run1/temp/result_concat.mp4")
        );
    }

    #[test]
    fn test_intermediate_and_final_names_differ() {
        let layout = RunLayout::new(".");
        assert_ne!(
            layout.concat_scratch().file_name(),
            layout.comparison_video().file_name()
        );
    }

    #[test]
    fn test_relative_root_stays_relative() {
        let layout = RunLayout::new("runs/a");
        assert!(layout.generated_video().starts_with("runs/a"));
    }
}
