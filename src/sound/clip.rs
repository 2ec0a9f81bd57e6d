//! Sound clips
//!
//! A clip references an audio file on disk. It is created empty and only
//! becomes usable once `init` has bound it to a path.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to an external audio resource bound to a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundClip {
    /// Stable identity, kept across re-initialization
    id: Uuid,
    /// Audio file this clip plays
    path: Option<PathBuf>,
    /// Display name (the file stem)
    name: String,
    /// When the clip was last bound to a file
    initialized_at: Option<DateTime<Utc>>,
}

impl SoundClip {
    /// Create an uninitialized clip
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            path: None,
            name: String::new(),
            initialized_at: None,
        }
    }

    /// Bind the clip to `path`, replacing any earlier source.
    pub fn init(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.path = Some(path.to_path_buf());
        self.initialized_at = Some(Utc::now());
    }

    pub fn is_initialized(&self) -> bool {
        self.path.is_some()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initialized_at(&self) -> Option<DateTime<Utc>> {
        self.initialized_at
    }
}

impl Default for SoundClip {
    fn default() -> Self {
        Self::new()
    }
}
