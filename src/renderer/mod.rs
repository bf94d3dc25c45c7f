//! Renderer property records and their shared storage.

pub mod arena;
pub mod data;

pub use arena::{RendererArena, RendererId};
pub use data::{PropertyError, RendererData};
