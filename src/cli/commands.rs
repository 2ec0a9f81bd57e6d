//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::layers::{KeyframeLayer, Layer, LayerKind};
use crate::settings::{PreferencePage, SettingKey, SettingValue, SettingsStore};
use crate::sound::SoundManager;

/// Print the effective value of a setting.
pub fn get(store: &SettingsStore, key: &str) -> Result<()> {
    let key: SettingKey = key.parse()?;
    println!("{}", store.get(key));
    Ok(())
}

/// Parse, validate and store a setting.
pub fn set(store: &mut SettingsStore, key: &str, raw: &str) -> Result<()> {
    let key: SettingKey = key.parse()?;
    let value = SettingValue::parse_for(key, raw)?;
    store.set(key, value)?;

    println!("{} = {}", key, store.get(key));
    Ok(())
}

/// List settings, optionally only those of one page.
pub fn list(store: &SettingsStore, page: Option<PreferencePage>) -> Result<()> {
    let pages: Vec<PreferencePage> = match page {
        Some(page) => vec![page],
        None => PreferencePage::ALL.to_vec(),
    };

    for page in pages {
        println!("[{}]", page);
        for key in page.keys() {
            let marker = if store.is_set(key) { "*" } else { " " };
            let range = key
                .range()
                .map(|r| format!(" ({}..={})", r.start(), r.end()))
                .unwrap_or_default();
            println!(
                " {}{:<20} {:<14} default {}{}",
                marker,
                key.name(),
                store.get(key).to_string(),
                key.default_value(),
                range
            );
        }
    }

    Ok(())
}

/// Reset one setting, or all of them.
pub fn reset(store: &mut SettingsStore, key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => {
            let key: SettingKey = key.parse()?;
            store.reset(key)?;
            println!("{} = {} (default)", key, store.get(key));
        }
        None => {
            store.reset_all()?;
            println!("All settings restored to defaults.");
        }
    }
    Ok(())
}

/// Run the attach operation against a scratch layer.
pub fn attach_sound(file: &Path, frame: i32, layer_kind: LayerKind) -> Result<()> {
    info!("Attaching {} at frame {}", file.display(), frame);

    let mut layer = Layer::new("Scratch", layer_kind);
    let mut manager = SoundManager::new();
    manager.load_sound(&mut layer, frame, file)?;

    println!("Layer '{}' ({}):", layer.name(), layer.kind());
    for (frame, clip) in layer.keyframes().iter() {
        println!("  frame {:>5}: {} [{}]", frame, clip.name(), clip.id());
        if let Some(sound) = manager.player().sound(clip.id()) {
            println!("    format: {:?}", sound.format);
            println!("    sha256: {}", sound.fingerprint);
            if let Some(wav) = &sound.wav {
                println!(
                    "    wav: {} Hz, {} ch, {}-bit, {:.2}s",
                    wav.sample_rate, wav.channels, wav.bits_per_sample, wav.duration_secs
                );
            }
        }
    }

    Ok(())
}
