use leptos::prelude::Owner;
use ::theme::{MemoryBackend, ThemeController, ThemeStore};

use super::*;

#[test]
fn theme_signal_starts_unresolved_light() {
    Owner::new().with(|| {
        let cell = ThemeSignal::new();
        assert_eq!(PhaseCell::get(&cell), ThemePhase::Unresolved(ThemePreference::Light));
        assert_eq!(cell.preference(), ThemePreference::Light);
    });
}

#[test]
fn controller_drives_theme_signal() {
    Owner::new().with(|| {
        let store = ThemeStore::shared(MemoryBackend::with_value(ThemePreference::Dark));
        let cell = ThemeSignal::new();
        let mut controller = ThemeController::unresolved(store, cell);
        assert_eq!(cell.signal().get_untracked(), ThemePhase::Unresolved(ThemePreference::Light));

        controller.activate();
        assert_eq!(cell.signal().get_untracked(), ThemePhase::Resolved(ThemePreference::Dark));

        controller.toggle().unwrap();
        assert_eq!(cell.preference(), ThemePreference::Light);
    });
}
