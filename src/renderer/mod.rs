//! Render request generation
//!
//! Describes each frame as plain draw and audio commands. Executing them is
//! the platform's job.

pub mod scene;

pub use scene::{Color, DrawCommand, RenderRequest, TextAlign, TextureId, compose};
