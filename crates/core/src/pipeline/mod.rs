pub mod compose_comparison_use_case;
pub mod inputs;
pub mod pipeline_logger;
pub mod run_lipsync_use_case;
