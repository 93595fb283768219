use theme::{MemoryBackend, ThemeStore};

use super::*;

#[test]
fn light_theme_is_checked() {
    assert!(is_checked(ThemePreference::Light));
}

#[test]
fn dark_theme_is_unchecked() {
    assert!(!is_checked(ThemePreference::Dark));
}

#[test]
fn toggle_label_names_the_opposite_theme() {
    assert_eq!(toggle_label(ThemePreference::Light), "Switch to dark theme");
    assert_eq!(toggle_label(ThemePreference::Dark), "Switch to light theme");
}

#[test]
fn switch_follows_a_toggle_that_could_not_be_persisted() {
    Owner::new().with(|| {
        let store = ThemeStore::shared(MemoryBackend::unavailable());
        let theme = ThemeSignal::new();
        let mut controller = ThemeController::unresolved(store, theme);
        controller.activate();
        assert!(is_checked(theme.signal().get_untracked().preference()));

        assert_eq!(controller.toggle(), Err(StoreError::Unavailable));
        assert!(!is_checked(theme.signal().get_untracked().preference()));
    });
}
