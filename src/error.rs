//! Error handling for Flipbook
//!
//! Every failure is returned as a value. Errors carry an error code and,
//! where the user can do something about it, a recovery suggestion.

use std::path::PathBuf;

use thiserror::Error;

use crate::layers::LayerKind;
use crate::settings::{SettingKey, SettingKind};

/// Result type alias for Flipbook operations
pub type Result<T> = std::result::Result<T, FlipbookError>;

/// Main error type for Flipbook operations
#[derive(Error, Debug)]
pub enum FlipbookError {
    // Attach Errors
    #[error("Layer '{layer}' is a {kind} layer, sounds can only be attached to sound layers")]
    InvalidLayerType { layer: String, kind: LayerKind },

    #[error("Invalid frame number: {frame}")]
    InvalidFrameNumber { frame: i32 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Sound player rejected {path}: {reason}")]
    PlaybackRegistrationFailed { path: PathBuf, reason: String },

    #[error("Could not add keyframe at frame {frame}")]
    CommitFailed { frame: u32 },

    // Settings Errors
    #[error("Unknown setting: {name}")]
    UnknownSetting { name: String },

    #[error("Setting '{key}' expects a {expected} value, got {found}")]
    SettingTypeMismatch {
        key: SettingKey,
        expected: SettingKind,
        found: SettingKind,
    },

    #[error("Setting '{key}' must be within {min}..={max}, got {value}")]
    SettingOutOfRange {
        key: SettingKey,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Invalid value for setting '{key}': {raw}")]
    InvalidSettingValue { key: SettingKey, raw: String },

    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlipbookError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            FlipbookError::InvalidLayerType { .. } => "INVALID_LAYER_TYPE",
            FlipbookError::InvalidFrameNumber { .. } => "INVALID_FRAME_NUMBER",
            FlipbookError::FileNotFound { .. } => "FILE_NOT_FOUND",
            FlipbookError::PlaybackRegistrationFailed { .. } => "PLAYBACK_REGISTRATION_FAILED",
            FlipbookError::CommitFailed { .. } => "COMMIT_FAILED",
            FlipbookError::UnknownSetting { .. } => "UNKNOWN_SETTING",
            FlipbookError::SettingTypeMismatch { .. } => "SETTING_TYPE_MISMATCH",
            FlipbookError::SettingOutOfRange { .. } => "SETTING_OUT_OF_RANGE",
            FlipbookError::InvalidSettingValue { .. } => "INVALID_SETTING_VALUE",
            FlipbookError::FileReadError { .. } => "FILE_READ_ERROR",
            FlipbookError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            FlipbookError::DirectoryCreateError { .. } => "DIRECTORY_CREATE_ERROR",
            FlipbookError::Io(_) => "IO_ERROR",
            FlipbookError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the user can fix the input and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FlipbookError::InvalidLayerType { .. }
                | FlipbookError::InvalidFrameNumber { .. }
                | FlipbookError::FileNotFound { .. }
                | FlipbookError::PlaybackRegistrationFailed { .. }
                | FlipbookError::UnknownSetting { .. }
                | FlipbookError::SettingTypeMismatch { .. }
                | FlipbookError::SettingOutOfRange { .. }
                | FlipbookError::InvalidSettingValue { .. }
        )
    }

    /// Returns a user-facing recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            FlipbookError::InvalidLayerType { .. } => {
                Some("Select a sound layer or create one before importing audio.")
            }
            FlipbookError::InvalidFrameNumber { .. } => {
                Some("Frame numbers start at 0. Move the playhead onto the timeline.")
            }
            FlipbookError::FileNotFound { .. } => Some("Check the file path and try again."),
            FlipbookError::PlaybackRegistrationFailed { .. } => {
                Some("Convert the sound to WAV, MP3, OGG, FLAC or M4A and import it again.")
            }
            FlipbookError::UnknownSetting { .. } => {
                Some("Run 'flipbook list' to see the available settings.")
            }
            FlipbookError::SettingOutOfRange { .. } => {
                Some("Pick a value inside the range shown by 'flipbook list'.")
            }
            FlipbookError::FileWriteError { .. } => {
                Some("Check that the settings directory is writable.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = FlipbookError::FileNotFound {
            path: PathBuf::from("boom.wav"),
        };
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
        assert!(err.is_recoverable());

        let err = FlipbookError::CommitFailed { frame: 3 };
        assert_eq!(err.error_code(), "COMMIT_FAILED");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_messages_name_the_layer() {
        let err = FlipbookError::InvalidLayerType {
            layer: "Ink".to_string(),
            kind: LayerKind::Vector,
        };
        assert_eq!(
            err.to_string(),
            "Layer 'Ink' is a vector layer, sounds can only be attached to sound layers"
        );
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = FlipbookError::SettingOutOfRange {
            key: SettingKey::FrameSize,
            value: 42,
            min: 4,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "Setting 'frameSize' must be within 4..=20, got 42"
        );
    }
}
