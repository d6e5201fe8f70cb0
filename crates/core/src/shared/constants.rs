/// Directory under the run root that holds user-facing deliverables.
pub const RESULTS_DIR: &str = "results";

/// Directory under the run root for intermediate artifacts. Files here are
/// scratch output and may be left behind for debugging after a failure.
pub const SCRATCH_DIR: &str = "temp";

/// Video produced by the external reenactment tool.
pub const GENERATED_VIDEO_NAME: &str = "output.mp4";

/// Final side-by-side deliverable. Named distinctly from the intermediate
/// so a half-finished run can never be mistaken for the real output.
pub const COMPARISON_VIDEO_NAME: &str = "output_concat_input.mp4";

/// Silent composited video awaiting the audio mux.
pub const CONCAT_SCRATCH_NAME: &str = "result_concat.mp4";

/// Frame rate used when a container reports a zero or unusable rate.
pub const FALLBACK_FPS: i32 = 30;
