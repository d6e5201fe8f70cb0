//! Lip-sync comparison pipeline.
//!
//! Drives an external face-reenactment tool, then composes the source and
//! generated videos into a side-by-side comparison muxed with the original
//! audio track. Domain logic is I/O-free; codec and subprocess details live
//! in the `infrastructure` modules.

pub mod composition;
pub mod pipeline;
pub mod reenact;
pub mod shared;
pub mod video;
