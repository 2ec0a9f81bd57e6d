//! Sound player registration
//!
//! The player decides whether a clip can be played. Decoding and output are
//! handled elsewhere; registration only checks that the file is something
//! the player understands and records what it learned about it.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{FlipbookError, Result};
use crate::sound::SoundClip;

/// Playback subsystem the attach operation registers clips with.
pub trait PlaybackBackend {
    /// What the backend keeps for a registered clip.
    type Registration;

    /// Accept `clip` for playback or explain why not.
    ///
    /// Registering a clip id again replaces the earlier registration. A
    /// rejected clip leaves earlier registrations untouched.
    fn add_sound(&mut self, clip: &SoundClip) -> Result<()>;

    /// Forget a clip. Returns false if it was not registered.
    fn remove_sound(&mut self, clip_id: Uuid) -> bool;

    /// Snapshot of the current registration for `clip_id`, if any.
    fn registration(&self, clip_id: Uuid) -> Option<Self::Registration>;

    /// Put back a snapshot taken with [`registration`](Self::registration).
    /// `None` leaves the clip unregistered. The source file is not read
    /// again, so this cannot fail.
    fn restore_registration(&mut self, clip_id: Uuid, snapshot: Option<Self::Registration>);
}

/// Audio container formats the player accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundFormat {
    Wav,
    Mp3,
    Ogg,
    Flac,
    M4a,
}

impl SoundFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "wav" | "wave" => Some(SoundFormat::Wav),
            "mp3" => Some(SoundFormat::Mp3),
            "ogg" => Some(SoundFormat::Ogg),
            "flac" => Some(SoundFormat::Flac),
            "m4a" => Some(SoundFormat::M4a),
            _ => None,
        }
    }
}

/// Header details read from a WAV file
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Duration in seconds
    pub duration_secs: f64,
}

impl WavInfo {
    /// Read the header of a WAV file
    pub fn probe(path: &Path) -> std::result::Result<Self, hound::Error> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        let frames = reader.duration() as f64;

        Ok(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            duration_secs: frames / spec.sample_rate as f64,
        })
    }
}

/// What the player knows about an accepted clip
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredSound {
    pub path: PathBuf,
    pub format: SoundFormat,
    /// SHA-256 of the file contents at registration time
    pub fingerprint: String,
    /// Header details, WAV only
    pub wav: Option<WavInfo>,
}

/// Default playback backend.
#[derive(Debug, Default)]
pub struct SoundPlayer {
    sounds: HashMap<Uuid, RegisteredSound>,
}

impl SoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sound(&self, clip_id: Uuid) -> Option<&RegisteredSound> {
        self.sounds.get(&clip_id)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

impl PlaybackBackend for SoundPlayer {
    fn add_sound(&mut self, clip: &SoundClip) -> Result<()> {
        let Some(path) = clip.path() else {
            return Err(rejected(Path::new(""), "clip has no source file"));
        };

        let format = SoundFormat::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();
            rejected(path, &format!("unsupported format '.{}'", ext))
        })?;

        let fingerprint = fingerprint(path)
            .map_err(|e| rejected(path, &format!("cannot read file: {}", e)))?;

        let wav = match format {
            SoundFormat::Wav => Some(
                WavInfo::probe(path)
                    .map_err(|e| rejected(path, &format!("not a valid WAV file: {}", e)))?,
            ),
            _ => None,
        };

        if let Some(info) = &wav {
            debug!(
                "{}: {} Hz, {} ch, {:.2}s",
                path.display(),
                info.sample_rate,
                info.channels,
                info.duration_secs
            );
        }

        let replaced = self.sounds.insert(
            clip.id(),
            RegisteredSound {
                path: path.to_path_buf(),
                format,
                fingerprint,
                wav,
            },
        );
        info!(
            "Registered sound {} ({:?}){}",
            path.display(),
            format,
            if replaced.is_some() { ", replacing earlier source" } else { "" }
        );

        Ok(())
    }

    fn remove_sound(&mut self, clip_id: Uuid) -> bool {
        self.sounds.remove(&clip_id).is_some()
    }

    type Registration = RegisteredSound;

    fn registration(&self, clip_id: Uuid) -> Option<RegisteredSound> {
        self.sounds.get(&clip_id).cloned()
    }

    fn restore_registration(&mut self, clip_id: Uuid, snapshot: Option<RegisteredSound>) {
        match snapshot {
            Some(sound) => {
                debug!("Restoring registration of {}", sound.path.display());
                self.sounds.insert(clip_id, sound);
            }
            None => {
                self.sounds.remove(&clip_id);
            }
        }
    }
}

fn rejected(path: &Path, reason: &str) -> FlipbookError {
    FlipbookError::PlaybackRegistrationFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// SHA-256 of a file, hex encoded
fn fingerprint(path: &Path) -> std::io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
