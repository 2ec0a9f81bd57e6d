//! Flipbook - preference store and sound keyframes for a 2D animation editor
//!
//! Flipbook is the non-GUI core behind the editor's preferences dialog and
//! its sound layers:
//! 1. Settings - typed, defaulted preferences persisted across restarts,
//!    with synchronous change notification
//! 2. Sound - attaching audio files to frames of sound layers, validated
//!    and registered with a playback backend before they are committed
//!
//! # Architecture
//!
//! - `settings`: keys, values, persistence backends and the store
//! - `layers`: layer kinds and the frame-indexed keyframe registry
//! - `sound`: clips, the playback registration seam and the sound manager

pub mod cli;
pub mod config;
pub mod error;
pub mod layers;
pub mod settings;
pub mod sound;

pub use config::AppConfig;
pub use error::{FlipbookError, Result};
pub use layers::{KeyframeLayer, KeyframeRegistry, Layer, LayerKind};
pub use settings::{SettingKey, SettingValue, SettingsStore};
pub use sound::{PlaybackBackend, SoundClip, SoundManager, SoundPlayer};
