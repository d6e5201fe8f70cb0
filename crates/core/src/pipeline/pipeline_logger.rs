use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for pipeline runs.
///
/// Keeps the use cases free of any specific output mechanism; the CLI plugs
/// in a logging implementation, tests usually plug in the null one.
pub trait PipelineLogger: Send {
    /// Frame-level progress within the current stage.
    fn progress(&mut self, current: usize, total: usize);

    /// How long a named stage took, in milliseconds.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// A human-readable status message.
    fn info(&mut self, message: &str);

    /// End-of-run report. Default: no-op.
    fn summary(&self) {}
}

/// Discards every event. Used where pipeline output is irrelevant.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Logs through the `log` crate, throttling progress output and keeping
/// per-stage timings for an end-of-run summary.
pub struct StdoutPipelineLogger {
    throttle_frames: usize,
    timings: HashMap<String, f64>,
    start_time: Instant,
    total_frames: usize,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_frames: 0,
        }
    }

    /// The formatted summary, or `None` when nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Run summary ({} frames, {elapsed_s:.1}s wall):",
            self.total_frames
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let ms = self.timings[stage];
            lines.push(format!("  {stage:16}: {ms:8.0}ms"));
        }

        Some(lines.join("\n"))
    }

    /// Recorded duration for a stage, if any.
    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings.get(stage).copied()
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(25)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_frames = total;
        if total > 0 && (current % self.throttle_frames == 0 || current == total) {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("encoding: {current}/{total} frames ({pct:.0}%)");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        // A rerun of the same stage overwrites; each run is single-shot.
        self.timings.insert(stage.to_string(), duration_ms);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_is_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing("encode", 5.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_recorded_per_stage() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.timing("read_base", 12.0);
        logger.timing("encode", 40.0);
        assert_eq!(logger.timing_for("read_base"), Some(12.0));
        assert_eq!(logger.timing_for("encode"), Some(40.0));
        assert_eq!(logger.timing_for("mux"), None);
    }

    #[test]
    fn test_summary_lists_stages() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.progress(5, 5);
        logger.timing("compose", 3.0);
        logger.timing("mux", 80.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("compose"));
        assert!(summary.contains("mux"));
        assert!(summary.contains("5 frames"));
    }

    #[test]
    fn test_empty_summary_is_none() {
        let logger = StdoutPipelineLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_tracks_total() {
        let mut logger = StdoutPipelineLogger::new(10);
        for i in 1..=30 {
            logger.progress(i, 30);
        }
        assert_eq!(logger.total_frames, 30);
    }

    #[test]
    fn test_throttle_never_zero() {
        let logger = StdoutPipelineLogger::new(0);
        assert_eq!(logger.throttle_frames, 1);
    }
}
