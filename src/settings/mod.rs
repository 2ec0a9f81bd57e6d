//! Settings Module
//!
//! Typed, defaulted preferences persisted across restarts, with synchronous
//! change notification for the editor's displays.

pub mod backend;
pub mod key;
pub mod observer;
pub mod page;
pub mod store;
pub mod value;

pub use backend::{JsonFileBackend, MemoryBackend, SettingsBackend, SettingsDocument};
pub use key::{SettingKey, SettingKind};
pub use observer::{ObserverId, SettingsObserver};
pub use page::{BackgroundStyle, PreferencePage};
pub use store::SettingsStore;
pub use value::SettingValue;
