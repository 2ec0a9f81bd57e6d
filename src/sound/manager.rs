//! Sound Manager
//!
//! Attaches audio files to frames of sound layers.

use std::path::Path;

use log::{info, warn};

use crate::error::{FlipbookError, Result};
use crate::layers::KeyframeLayer;
use crate::sound::player::{PlaybackBackend, SoundPlayer};

/// Binds sound files to layer keyframes through a playback backend.
#[derive(Debug, Default)]
pub struct SoundManager<P: PlaybackBackend = SoundPlayer> {
    player: P,
}

impl SoundManager<SoundPlayer> {
    /// Create a manager with the default sound player
    pub fn new() -> Self {
        Self::with_player(SoundPlayer::new())
    }
}

impl<P: PlaybackBackend> SoundManager<P> {
    pub fn with_player(player: P) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Attach the sound at `path` to `frame` of `layer`.
    ///
    /// Checks run in order and the first failure wins: the layer must be a
    /// sound layer, the frame must not be negative, and the file must exist.
    /// An existing clip at the frame is re-initialized rather than
    /// duplicated. The layer is only modified once the player has accepted
    /// the clip; on any failure it is left as it was.
    ///
    /// # Errors
    /// * `InvalidLayerType` - `layer` is not a sound layer
    /// * `InvalidFrameNumber` - `frame` is negative
    /// * `FileNotFound` - `path` is not an existing file
    /// * whatever the player returns when it rejects the clip
    /// * `CommitFailed` - the layer refused the accepted clip
    pub fn load_sound<L>(&mut self, layer: &mut L, frame: i32, path: impl AsRef<Path>) -> Result<()>
    where
        L: KeyframeLayer + ?Sized,
    {
        let path = path.as_ref();

        if !layer.kind().is_sound() {
            return Err(FlipbookError::InvalidLayerType {
                layer: layer.name().to_string(),
                kind: layer.kind(),
            });
        }

        let Ok(frame) = u32::try_from(frame) else {
            return Err(FlipbookError::InvalidFrameNumber { frame });
        };

        if !path.is_file() {
            return Err(FlipbookError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        // Work on a copy so a rejected clip never touches the layer.
        let mut clip = layer.keyframe_at(frame).cloned().unwrap_or_default();
        clip.init(path);
        let clip_id = clip.id();
        let snapshot = self.player.registration(clip_id);

        if let Err(e) = self.player.add_sound(&clip) {
            warn!("Player rejected {}: {}", path.display(), e);
            return Err(e);
        }

        if !layer.add_keyframe(frame, clip) {
            warn!("Layer '{}' refused clip at frame {}", layer.name(), frame);
            // Put the player back in step with what the layer still holds.
            self.player.restore_registration(clip_id, snapshot);
            return Err(FlipbookError::CommitFailed { frame });
        }

        info!(
            "Attached {} to frame {} of layer '{}'",
            path.display(),
            frame,
            layer.name()
        );
        Ok(())
    }
}
