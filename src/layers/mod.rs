//! Layer Model Module
//!
//! Timeline layers as seen by the sound core:
//! - Layer kinds and the `KeyframeLayer` collaborator trait
//! - The frame-indexed keyframe registry

mod keyframes;
mod layer;

pub use keyframes::KeyframeRegistry;
pub use layer::{KeyframeLayer, Layer, LayerKind};
