//! Sound Module
//!
//! Sound clips, the playback registration seam and the manager that
//! attaches clips to sound-layer keyframes.

mod clip;
mod manager;
pub mod player;

pub use clip::SoundClip;
pub use manager::SoundManager;
pub use player::{PlaybackBackend, RegisteredSound, SoundFormat, SoundPlayer, WavInfo};
