use std::sync::Mutex;

use super::*;
use crate::util::settings::{MemoryStore, SettingsError};

#[derive(Default)]
struct RecordingPort {
    applied: Mutex<Vec<ThemePreference>>,
}

impl RecordingPort {
    fn last(&self) -> Option<ThemePreference> {
        self.applied.lock().unwrap().last().copied()
    }

    fn count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }
}

impl ThemePort for RecordingPort {
    fn apply(&self, theme: ThemePreference) {
        self.applied.lock().unwrap().push(theme);
    }
}

struct FailingStore;

impl SettingsStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), SettingsError> {
        Err(SettingsError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() })
    }
}

// =============================================================
// read_preference
// =============================================================

#[test]
fn read_preference_defaults_to_light() {
    let store = MemoryStore::new();
    assert_eq!(read_preference(&store, "theme"), ThemePreference::Light);
}

#[test]
fn read_preference_uses_stored_dark() {
    let store = MemoryStore::with_entries([("theme", "dark")]);
    assert_eq!(read_preference(&store, "theme"), ThemePreference::Dark);
}

#[test]
fn read_preference_ignores_unknown_value() {
    let store = MemoryStore::with_entries([("theme", "sepia")]);
    assert_eq!(read_preference(&store, "theme"), ThemePreference::Light);
}

#[test]
fn read_preference_uses_given_key() {
    let store = MemoryStore::with_entries([("ui-theme", "dark")]);
    assert_eq!(read_preference(&store, "theme"), ThemePreference::Light);
    assert_eq!(read_preference(&store, "ui-theme"), ThemePreference::Dark);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_cycles_and_persists_each_step() {
    let store = MemoryStore::new();
    let port = RecordingPort::default();

    let first = toggle(ThemePreference::Light, &store, &port, "theme");
    assert_eq!(first, ThemePreference::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(port.last(), Some(ThemePreference::Dark));

    let second = toggle(first, &store, &port, "theme");
    assert_eq!(second, ThemePreference::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(port.last(), Some(ThemePreference::Light));
    assert_eq!(port.count(), 2);
}

#[test]
fn toggled_value_is_read_back_on_next_mount() {
    let store = MemoryStore::new();
    let next = toggle(ThemePreference::Light, &store, &NoopTheme, "theme");
    assert_eq!(read_preference(&store, "theme"), next);
}

#[test]
fn toggle_with_failing_store_still_flips_and_applies() {
    let port = RecordingPort::default();
    let next = toggle(ThemePreference::Light, &FailingStore, &port, "theme");
    assert_eq!(next, ThemePreference::Dark);
    assert_eq!(port.last(), Some(ThemePreference::Dark));
}
