#![cfg(not(feature = "hydrate"))]

use theme::{SharedPhase, ThemeController, ThemePhase, ThemeStore};

use super::*;

#[test]
fn browser_backend_is_unavailable_without_hydrate() {
    assert_eq!(BrowserBackend.load(), Err(StoreError::Unavailable));
    assert_eq!(BrowserBackend.save(ThemePreference::Dark), Err(StoreError::Unavailable));
}

#[test]
fn system_preference_is_light_without_hydrate() {
    assert_eq!(system_preference(), ThemePreference::Light);
    assert_eq!(BrowserBackend.system_default(), ThemePreference::Light);
}

#[test]
fn server_render_controller_starts_light() {
    let store = ThemeStore::shared(BrowserBackend);
    let mut controller = ThemeController::new(store, SharedPhase::default());
    assert_eq!(controller.phase(), ThemePhase::Unresolved(ThemePreference::Light));
    assert_eq!(controller.activate(), ThemePhase::Unresolved(ThemePreference::Light));
}

#[test]
fn watch_system_scheme_is_noop_without_hydrate() {
    let store = ThemeStore::shared(BrowserBackend);
    watch_system_scheme(store.clone());
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn system_change_publishes_only_without_stored_preference() {
    assert_eq!(system_change_to_publish(false, true), Some(ThemePreference::Dark));
    assert_eq!(system_change_to_publish(false, false), Some(ThemePreference::Light));
    assert_eq!(system_change_to_publish(true, true), None);
    assert_eq!(system_change_to_publish(true, false), None);
}
