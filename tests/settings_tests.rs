//! Settings Integration Tests
//!
//! Persistence and change propagation through the public store API.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use flipbook::settings::{BackgroundStyle, PreferencePage, SettingKey, SettingValue, SettingsStore};

#[test]
fn test_fresh_file_store_returns_every_default() {
    let temp = tempdir().unwrap();
    let store = SettingsStore::open_file(temp.path().join("settings.json")).unwrap();

    for key in SettingKey::ALL {
        assert_eq!(store.get(key), key.default_value(), "{}", key);
    }
    assert_eq!(store.get_int(SettingKey::AutoSaveNumber), 20);
    assert_eq!(store.get_int(SettingKey::LabelFontSize), 12);
    assert_eq!(store.get_int(SettingKey::FrameSize), 6);
    assert!(!store.is_on(SettingKey::ShortScrub));
}

#[test]
fn test_values_survive_reopen() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("settings.json");

    {
        let mut store = SettingsStore::open_file(&path).unwrap();
        store.set(SettingKey::TimelineLength, 480).unwrap();
        store.set(SettingKey::BlurryZoom, true).unwrap();
        store
            .set(SettingKey::BackgroundStyle, BackgroundStyle::Checkerboard.as_str())
            .unwrap();
    }

    let store = SettingsStore::open_file(&path).unwrap();
    assert_eq!(store.get_int(SettingKey::TimelineLength), 480);
    assert!(store.is_on(SettingKey::BlurryZoom));
    assert_eq!(store.get_string(SettingKey::BackgroundStyle), "checkerboard");
    assert!(!store.is_set(SettingKey::Shadow));
}

#[test]
fn test_set_is_durable_before_returning() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("settings.json");
    let mut store = SettingsStore::open_file(&path).unwrap();

    store.set(SettingKey::OnionNextFramesNum, 9).unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["values"]["onionNextFramesNum"], 9);
    assert_eq!(on_disk["version"], 1);
    assert!(on_disk["saved_at"].is_string());
}

#[test]
fn test_observers_see_each_change_in_order() {
    let mut store = SettingsStore::in_memory();
    let log = Rc::new(RefCell::new(Vec::new()));

    let timeline = Rc::clone(&log);
    store.subscribe(move |key: SettingKey, value: &SettingValue| {
        if key.page() == PreferencePage::Timeline {
            timeline.borrow_mut().push(format!("timeline {}={}", key, value));
        }
    });
    let canvas = Rc::clone(&log);
    let canvas_id = store.subscribe(move |key: SettingKey, value: &SettingValue| {
        canvas.borrow_mut().push(format!("canvas {}={}", key, value));
    });

    store.set(SettingKey::FrameSize, 10).unwrap();
    store.set(SettingKey::Antialias, false).unwrap();
    assert!(store.unsubscribe(canvas_id));
    store.set(SettingKey::DrawLabel, false).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "timeline frameSize=10".to_string(),
            "canvas frameSize=10".to_string(),
            "canvas antialiasing=false".to_string(),
            "timeline drawLabel=false".to_string(),
        ]
    );
}

#[test]
fn test_unreadable_entries_fall_back_to_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "version": 1,
            "values": {
                "curveSmoothing": 40,
                "windowOpacity": 95,
                "background": "tartan",
                "toolCursors": 0,
                "somethingElse": true
            }
        }"#,
    )
    .unwrap();

    let store = SettingsStore::open_file(&path).unwrap();
    assert_eq!(store.get_int(SettingKey::CurveSmoothing), 40);
    assert_eq!(store.get_int(SettingKey::WindowOpacity), 0);
    assert_eq!(store.get_string(SettingKey::BackgroundStyle), "white");
    assert!(store.is_on(SettingKey::ToolCursor));
}

#[test]
fn test_malformed_timestamp_keeps_stored_values() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, r#"{"saved_at":"yesterday","values":{"frameSize":10}}"#).unwrap();

    let store = SettingsStore::open_file(&path).unwrap();
    assert_eq!(store.get_int(SettingKey::FrameSize), 10);
}

#[test]
fn test_reset_all_persists() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("settings.json");

    let mut store = SettingsStore::open_file(&path).unwrap();
    store.set(SettingKey::AutoSave, false).unwrap();
    store.set(SettingKey::AutoSaveNumber, 100).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |key: SettingKey, value: &SettingValue| {
        sink.borrow_mut().push((key, value.clone()));
    });
    store.reset_all().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (SettingKey::AutoSave, SettingValue::Bool(true)),
            (SettingKey::AutoSaveNumber, SettingValue::Int(20)),
        ]
    );

    let reopened = SettingsStore::open_file(&path).unwrap();
    assert!(reopened.is_on(SettingKey::AutoSave));
    assert!(!reopened.is_set(SettingKey::AutoSave));
}
