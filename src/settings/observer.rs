//! Change notification for settings consumers.
//!
//! Observers are called synchronously, first-subscribed first-called, after
//! the new value has been persisted.

use log::debug;

use crate::settings::key::SettingKey;
use crate::settings::value::SettingValue;

/// Something that reacts to a setting changing.
pub trait SettingsObserver {
    fn setting_changed(&mut self, key: SettingKey, value: &SettingValue);
}

impl<F> SettingsObserver for F
where
    F: FnMut(SettingKey, &SettingValue),
{
    fn setting_changed(&mut self, key: SettingKey, value: &SettingValue) {
        self(key, value)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observers.
#[derive(Default)]
pub struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn SettingsObserver>)>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn SettingsObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, key: SettingKey, value: &SettingValue) {
        debug!(
            "Notifying {} observer(s): {} = {}",
            self.entries.len(),
            key,
            value
        );
        for (_, observer) in self.entries.iter_mut() {
            observer.setting_changed(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.entries.len())
            .finish()
    }
}
