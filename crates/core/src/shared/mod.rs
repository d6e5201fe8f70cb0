pub mod constants;
pub mod frame;
pub mod frame_sequence;
pub mod run_layout;
pub mod video_metadata;
