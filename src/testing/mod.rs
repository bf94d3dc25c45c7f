//! Headless testing utilities.

pub mod backend;
pub mod harness;

pub use backend::{DrawCall, RecordingBackend};
pub use harness::Harness;
