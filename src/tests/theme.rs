use crate::utils::{ MemoryHost, ThemePreference, ThemeStore };
use super::common::{ mocks::RecordingHost, setup };

fn theme_classes(host: &MemoryHost) -> Vec<&str> {
    host.root_classes()
        .into_iter()
        .filter(|c| *c == "light" || *c == "dark")
        .collect()
}

#[test]
fn platform_signal_decides_without_persisted_value() {
    setup();
    for (prefers_dark, expected) in [(true, ThemePreference::Dark), (false, ThemePreference::Light)] {
        let mut store = ThemeStore::new(MemoryHost::new(prefers_dark));
        assert_eq!(store.resolve(), expected);
        assert_eq!(store.preference(), Some(expected));
    }
}

#[test]
fn toggle_keeps_root_and_storage_in_sync() {
    setup();
    let mut host = MemoryHost::new(false);
    host.add_root_class("antialiased");
    let mut store = ThemeStore::new(host);
    store.resolve();

    for _ in 0..3 {
        let active = store.toggle().unwrap();
        assert_eq!(theme_classes(store.host()), vec![active.as_str()]);
        assert_eq!(store.host().persisted(), Some(active.as_str()));
    }
    assert!(store.host().root_classes().contains(&"antialiased"));
}

#[test]
fn double_toggle_restores_original() {
    setup();
    let mut store = ThemeStore::new(MemoryHost::new(true));
    let original = store.resolve();
    store.toggle();
    store.toggle();
    assert_eq!(store.preference(), Some(original));
}

#[test]
fn initial_resolution_is_written_back() {
    setup();
    let mut store = ThemeStore::new(RecordingHost::new(MemoryHost::new(true)));
    store.resolve();
    store.toggle();
    assert_eq!(store.host().writes, vec![ThemePreference::Dark, ThemePreference::Light]);
}

#[test]
fn unavailable_storage_is_not_fatal() {
    setup();
    let mut store = ThemeStore::new(MemoryHost::without_storage(true));
    assert_eq!(store.resolve(), ThemePreference::Dark);
    assert_eq!(store.toggle(), Some(ThemePreference::Light));
    assert_eq!(store.preference(), Some(ThemePreference::Light));
    assert_eq!(theme_classes(store.host()), vec!["light"]);
    assert_eq!(store.host().persisted(), None);
}

#[test]
fn missing_root_still_persists() {
    setup();
    let mut store = ThemeStore::new(RecordingHost::without_root(MemoryHost::new(false)));
    assert_eq!(store.resolve(), ThemePreference::Light);
    assert_eq!(store.toggle(), Some(ThemePreference::Dark));
    assert_eq!(store.host().inner.persisted(), Some("dark"));
}

#[test]
fn user_choice_survives_a_new_store() {
    setup();
    let mut first = ThemeStore::new(MemoryHost::new(false));
    first.resolve();
    first.toggle();

    // A later mount sees the stored choice even though the platform says light.
    let mut second = ThemeStore::new(first.host().clone());
    assert_eq!(second.resolve(), ThemePreference::Dark);
}
