//! Unit tests for display preference resolution and persistence.

use portfolio::preference::{
    resolve_preference, DisplayPreference, FileStore, PreferenceState, PreferenceStore, THEME_KEY,
};
use tempfile::tempdir;

#[test]
fn test_empty_store_follows_ambient() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let dark = PreferenceState::initialize(Box::new(FileStore::open(&path)), &true);
    assert_eq!(dark.current(), DisplayPreference::Dark);

    let light = PreferenceState::initialize(Box::new(FileStore::open(&path)), &false);
    assert_eq!(light.current(), DisplayPreference::Light);
}

#[test]
fn test_stored_value_beats_ambient() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \"light\"\n").unwrap();

    let state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &true);
    assert_eq!(state.current(), DisplayPreference::Light);
}

#[test]
fn test_toggle_twice_restores_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \"dark\"\n").unwrap();

    let mut state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &false);
    state.toggle();
    assert_eq!(FileStore::open(&path).get(THEME_KEY).as_deref(), Some("light"));

    state.toggle();
    assert_eq!(state.current(), DisplayPreference::Dark);
    assert_eq!(FileStore::open(&path).get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_unwritable_store_still_toggles() {
    let dir = tempdir().unwrap();
    // Parent is a file, so the write must fail
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("preferences.toml");

    let mut state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &false);
    assert_eq!(state.toggle(), DisplayPreference::Dark);
}

#[test]
fn test_resolve_truth_table() {
    for stored in [None, Some(DisplayPreference::Light), Some(DisplayPreference::Dark)] {
        for ambient in [false, true] {
            let expected = match stored {
                Some(preference) => preference,
                None if ambient => DisplayPreference::Dark,
                None => DisplayPreference::Light,
            };
            assert_eq!(resolve_preference(stored, &ambient), expected);
        }
    }
}

#[test]
fn test_unrecognized_stored_value_ignores_ambient() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \"sepia\"\n").unwrap();

    let state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &true);
    assert_eq!(state.current(), DisplayPreference::Light);
}

#[test]
fn test_padded_dark_value_is_light() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \" dark \"\n").unwrap();

    let state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &false);
    assert_eq!(state.current(), DisplayPreference::Light);
}

#[test]
fn test_toggle_keeps_other_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \"light\"\nfont = 1\n").unwrap();

    let mut state = PreferenceState::initialize(Box::new(FileStore::open(&path)), &false);
    state.toggle();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(reopened.get("font").as_deref(), Some("1"));
}
