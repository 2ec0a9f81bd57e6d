//! Settings persistence.
//!
//! A backend reads and writes a [`SettingsDocument`]. The store decides what
//! goes into the document; backends only move it to and from storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};

/// Current settings file schema version.
pub const SETTINGS_VERSION: u32 = 1;

/// On-disk form of the settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    /// Schema version of the file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// When the document was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    /// Raw values keyed by persisted setting name.
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl SettingsDocument {
    /// Build a document from parsed JSON, keeping whatever is usable.
    ///
    /// A malformed `version` or `saved_at` is ignored, and `values` is kept
    /// as long as it is an object. Individual entries are checked by the
    /// store.
    pub fn from_json(json: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut fields) = json else {
            warn!("Settings file is not a JSON object, using defaults");
            return Self::default();
        };

        let version = match fields.remove("version") {
            None => SETTINGS_VERSION,
            Some(raw) => match raw.as_u64().and_then(|v| u32::try_from(v).ok()) {
                Some(version) => version,
                None => {
                    warn!("Ignoring malformed settings version {}", raw);
                    SETTINGS_VERSION
                }
            },
        };

        let saved_at = match fields.remove("saved_at") {
            None | Some(serde_json::Value::Null) => None,
            Some(raw) => match raw.as_str().map(DateTime::parse_from_rfc3339) {
                Some(Ok(stamp)) => Some(stamp.with_timezone(&Utc)),
                _ => {
                    warn!("Ignoring malformed settings timestamp {}", raw);
                    None
                }
            },
        };

        let values = match fields.remove("values") {
            None => BTreeMap::new(),
            Some(serde_json::Value::Object(values)) => values.into_iter().collect(),
            Some(raw) => {
                warn!("Settings values are not an object ({}), using defaults", raw);
                BTreeMap::new()
            }
        };

        Self {
            version,
            saved_at,
            values,
        }
    }
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            saved_at: None,
            values: BTreeMap::new(),
        }
    }
}

/// Somewhere settings can be loaded from and saved to.
pub trait SettingsBackend {
    /// Load the stored document. A backend with nothing stored yet returns
    /// an empty document.
    fn load(&mut self) -> Result<SettingsDocument>;

    /// Replace the stored document.
    fn save(&mut self, document: &SettingsDocument) -> Result<()>;
}

/// Settings kept in a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsBackend for JsonFileBackend {
    fn load(&mut self) -> Result<SettingsDocument> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(SettingsDocument::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| FlipbookError::FileReadError {
            path: self.path.clone(),
            source: e,
        })?;

        let json: serde_json::Value = serde_json::from_str(&content)?;
        Ok(SettingsDocument::from_json(json))
    }

    fn save(&mut self, document: &SettingsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| FlipbookError::DirectoryCreateError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content).map_err(|e| FlipbookError::FileWriteError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

/// Settings that live only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Option<SettingsDocument>,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, as if it had been saved earlier.
    pub fn with_document(document: SettingsDocument) -> Self {
        Self {
            document: Some(document),
            saves: 0,
        }
    }

    /// The last saved document.
    pub fn document(&self) -> Option<&SettingsDocument> {
        self.document.as_ref()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&mut self) -> Result<SettingsDocument> {
        Ok(self.document.clone().unwrap_or_default())
    }

    fn save(&mut self, document: &SettingsDocument) -> Result<()> {
        self.document = Some(document.clone());
        self.saves += 1;
        Ok(())
    }
}
