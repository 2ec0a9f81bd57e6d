//! Timeline layers
//!
//! The editor's layers live outside this crate. The attach operation only
//! needs to know a layer's kind and to read and add keyframes, which is what
//! [`KeyframeLayer`] exposes. [`Layer`] is the in-crate implementation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keyframes::KeyframeRegistry;
use crate::sound::SoundClip;

/// Type tag of a timeline layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Bitmap,
    Vector,
    Camera,
    Sound,
}

impl LayerKind {
    /// Only sound layers hold sound clips
    pub fn is_sound(self) -> bool {
        self == LayerKind::Sound
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerKind::Bitmap => "bitmap",
            LayerKind::Vector => "vector",
            LayerKind::Camera => "camera",
            LayerKind::Sound => "sound",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bitmap" => Ok(LayerKind::Bitmap),
            "vector" => Ok(LayerKind::Vector),
            "camera" => Ok(LayerKind::Camera),
            "sound" => Ok(LayerKind::Sound),
            other => Err(format!("unknown layer kind '{}'", other)),
        }
    }
}

/// What the attach operation needs from a layer.
pub trait KeyframeLayer {
    fn name(&self) -> &str;

    fn kind(&self) -> LayerKind;

    /// Clip committed at `frame`, if any.
    fn keyframe_at(&self, frame: u32) -> Option<&SoundClip>;

    /// Commit `clip` at `frame`, replacing whatever was there.
    ///
    /// Returns false if the layer refused the clip; the layer is then
    /// unchanged.
    fn add_keyframe(&mut self, frame: u32, clip: SoundClip) -> bool;
}

/// A named timeline layer with its keyframes.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    kind: LayerKind,
    keyframes: KeyframeRegistry,
}

impl Layer {
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            keyframes: KeyframeRegistry::new(),
        }
    }

    /// Shorthand for a sound layer
    pub fn sound(name: impl Into<String>) -> Self {
        Self::new(name, LayerKind::Sound)
    }

    pub fn keyframes(&self) -> &KeyframeRegistry {
        &self.keyframes
    }

    /// Remove the clip at `frame`
    pub fn remove_keyframe(&mut self, frame: u32) -> Option<SoundClip> {
        self.keyframes.remove(frame)
    }
}

impl KeyframeLayer for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> LayerKind {
        self.kind
    }

    fn keyframe_at(&self, frame: u32) -> Option<&SoundClip> {
        self.keyframes.get(frame)
    }

    fn add_keyframe(&mut self, frame: u32, clip: SoundClip) -> bool {
        // Uninitialized clips never enter the registry.
        if !self.kind.is_sound() || !clip.is_initialized() {
            return false;
        }
        self.keyframes.insert(frame, clip);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_kind_parse() {
        assert_eq!("Sound".parse::<LayerKind>(), Ok(LayerKind::Sound));
        assert!("audio".parse::<LayerKind>().is_err());
        assert_eq!(LayerKind::Camera.to_string(), "camera");
    }

    #[test]
    fn test_add_keyframe_refuses_uninitialized_clip() {
        let mut layer = Layer::sound("Music");
        assert!(!layer.add_keyframe(0, SoundClip::new()));
        assert!(layer.keyframes().is_empty());
    }

    #[test]
    fn test_add_keyframe_refuses_non_sound_layer() {
        let mut layer = Layer::new("Ink", LayerKind::Vector);
        let mut clip = SoundClip::new();
        clip.init("beep.wav");
        assert!(!layer.add_keyframe(0, clip));
        assert!(layer.keyframe_at(0).is_none());
    }

    #[test]
    fn test_add_keyframe_commits_initialized_clip() {
        let mut layer = Layer::sound("Music");
        let mut clip = SoundClip::new();
        clip.init("beep.wav");
        assert!(layer.add_keyframe(7, clip));
        assert_eq!(layer.keyframe_at(7).unwrap().name(), "beep");
        assert!(layer.remove_keyframe(7).is_some());
    }
}
