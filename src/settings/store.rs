//! The settings store.
//!
//! One canonical store serves every preference page. Reads fall back to the
//! key's declared default; writes are validated, persisted immediately and
//! then broadcast to observers.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use log::{info, warn};

use crate::error::Result;
use crate::settings::backend::{
    JsonFileBackend, MemoryBackend, SettingsBackend, SettingsDocument, SETTINGS_VERSION,
};
use crate::settings::key::SettingKey;
use crate::settings::observer::{ObserverId, ObserverList, SettingsObserver};
use crate::settings::value::SettingValue;

/// Typed key/value preferences with defaults and change notification.
pub struct SettingsStore {
    backend: Box<dyn SettingsBackend>,
    values: BTreeMap<SettingKey, SettingValue>,
    observers: ObserverList,
}

impl SettingsStore {
    /// Open a store over `backend`, loading whatever it holds.
    ///
    /// Unknown names are ignored. Values of the wrong kind or outside the
    /// key's range are dropped so the default applies.
    pub fn open(backend: impl SettingsBackend + 'static) -> Result<Self> {
        let mut backend: Box<dyn SettingsBackend> = Box::new(backend);
        let document = backend.load()?;

        let mut values = BTreeMap::new();
        for (name, raw) in &document.values {
            let Some(key) = SettingKey::from_name(name) else {
                warn!("Ignoring unknown setting '{}'", name);
                continue;
            };
            let Some(value) = SettingValue::from_json(raw) else {
                warn!("Ignoring unreadable value for '{}': {}", name, raw);
                continue;
            };
            if let Err(e) = key.validate(&value) {
                warn!("Ignoring stored value for '{}': {}", name, e);
                continue;
            }
            values.insert(key, value);
        }

        Ok(Self {
            backend,
            values,
            observers: ObserverList::new(),
        })
    }

    /// Open a store backed by a JSON file. A missing file means all defaults.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening settings: {}", path.display());
        Self::open(JsonFileBackend::new(path))
    }

    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
            values: BTreeMap::new(),
            observers: ObserverList::new(),
        }
    }

    /// Current value of `key`, or its default.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value())
    }

    pub fn get_int(&self, key: SettingKey) -> i32 {
        match self.values.get(&key) {
            Some(value) => value.as_int(),
            None => key.default_value().as_int(),
        }
    }

    pub fn get_string(&self, key: SettingKey) -> String {
        self.get(key).to_string()
    }

    /// Whether a boolean setting is switched on.
    pub fn is_on(&self, key: SettingKey) -> bool {
        match self.values.get(&key) {
            Some(value) => value.as_bool(),
            None => key.default_value().as_bool(),
        }
    }

    /// True if a value is stored for `key` rather than falling back.
    pub fn is_set(&self, key: SettingKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Validate, store and persist `value`, then notify observers.
    ///
    /// A rejected value leaves the store untouched and notifies nobody. If
    /// persisting fails the previous value is restored.
    pub fn set(&mut self, key: SettingKey, value: impl Into<SettingValue>) -> Result<()> {
        let value = value.into();
        key.validate(&value)?;

        let previous = self.values.insert(key, value.clone());
        if let Err(e) = self.persist() {
            match previous {
                Some(old) => self.values.insert(key, old),
                None => self.values.remove(&key),
            };
            return Err(e);
        }

        info!("Setting {} = {}", key, value);
        self.observers.notify(key, &value);
        Ok(())
    }

    /// Drop the stored value for `key` so the default applies again.
    pub fn reset(&mut self, key: SettingKey) -> Result<()> {
        let Some(previous) = self.values.remove(&key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.values.insert(key, previous);
            return Err(e);
        }

        info!("Setting {} reset to default", key);
        self.observers.notify(key, &key.default_value());
        Ok(())
    }

    /// Reset every stored setting to its default.
    pub fn reset_all(&mut self) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }

        let previous = std::mem::take(&mut self.values);
        if let Err(e) = self.persist() {
            self.values = previous;
            return Err(e);
        }

        info!("All settings reset to defaults");
        for key in previous.into_keys() {
            self.observers.notify(key, &key.default_value());
        }
        Ok(())
    }

    /// Register an observer called after every successful change.
    pub fn subscribe(&mut self, observer: impl SettingsObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Every key with its effective value, in display order.
    pub fn entries(&self) -> Vec<(SettingKey, SettingValue)> {
        SettingKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .collect()
    }

    fn persist(&mut self) -> Result<()> {
        let document = SettingsDocument {
            version: SETTINGS_VERSION,
            saved_at: Some(Utc::now()),
            values: self
                .values
                .iter()
                .map(|(key, value)| (key.name().to_string(), value.to_json()))
                .collect(),
        };
        self.backend.save(&document)
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("values", &self.values)
            .field("observers", &self.observers)
            .finish()
    }
}
