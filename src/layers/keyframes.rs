//! Keyframe Registry
//!
//! Frame-indexed storage for the sound clips of one layer. Each frame holds
//! at most one clip; inserting at an occupied frame replaces it.

use std::collections::BTreeMap;

use crate::sound::SoundClip;

/// Clips of a layer, ordered by frame.
#[derive(Debug, Clone, Default)]
pub struct KeyframeRegistry {
    frames: BTreeMap<u32, SoundClip>,
}

impl KeyframeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            frames: BTreeMap::new(),
        }
    }

    /// Clip at `frame`, if any
    pub fn get(&self, frame: u32) -> Option<&SoundClip> {
        self.frames.get(&frame)
    }

    /// Store `clip` at `frame`
    ///
    /// # Returns
    /// The clip previously held at that frame
    pub fn insert(&mut self, frame: u32, clip: SoundClip) -> Option<SoundClip> {
        self.frames.insert(frame, clip)
    }

    /// Remove and return the clip at `frame`
    pub fn remove(&mut self, frame: u32) -> Option<SoundClip> {
        self.frames.remove(&frame)
    }

    pub fn contains(&self, frame: u32) -> bool {
        self.frames.contains_key(&frame)
    }

    /// Occupied frames in ascending order
    pub fn frames(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.keys().copied()
    }

    /// (frame, clip) pairs in ascending frame order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &SoundClip)> {
        self.frames.iter().map(|(frame, clip)| (*frame, clip))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(path: &str) -> SoundClip {
        let mut clip = SoundClip::new();
        clip.init(path);
        clip
    }

    #[test]
    fn test_insert_replaces_at_same_frame() {
        let mut registry = KeyframeRegistry::new();
        assert!(registry.insert(4, clip("a.wav")).is_none());

        let replaced = registry.insert(4, clip("b.wav")).unwrap();
        assert_eq!(replaced.name(), "a");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(4).unwrap().name(), "b");
    }

    #[test]
    fn test_frames_are_ordered() {
        let mut registry = KeyframeRegistry::new();
        registry.insert(30, clip("c.wav"));
        registry.insert(1, clip("a.wav"));
        registry.insert(12, clip("b.wav"));

        assert_eq!(registry.frames().collect::<Vec<_>>(), vec![1, 12, 30]);
        assert!(registry.remove(12).is_some());
        assert!(!registry.contains(12));
    }
}
