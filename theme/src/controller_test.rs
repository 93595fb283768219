use std::sync::Arc;

use super::*;
use crate::store::{MemoryBackend, PreferenceBackend, ThemeStore};

/// Backend that records every save, for asserting write counts.
#[derive(Default)]
struct CountingBackend {
    inner: MemoryBackend,
    saves: Mutex<Vec<ThemePreference>>,
}

impl PreferenceBackend for CountingBackend {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        self.inner.load()
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StoreError> {
        self.saves.lock().unwrap().push(preference);
        self.inner.save(preference)
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn unavailable_store_initializes_to_light() {
    let store = ThemeStore::shared(MemoryBackend::unavailable());
    let controller = ThemeController::new(store, SharedPhase::default());
    assert_eq!(controller.phase(), ThemePhase::Unresolved(ThemePreference::Light));
    assert_eq!(controller.current(), ThemePreference::Light);
}

#[test]
fn unavailable_store_with_dark_system_default_still_initializes_to_light() {
    let store = ThemeStore::shared(MemoryBackend::unavailable().with_system_default(ThemePreference::Dark));
    let mut controller = ThemeController::new(store, SharedPhase::default());
    assert_eq!(controller.current(), ThemePreference::Light);
    assert_eq!(controller.activate(), ThemePhase::Unresolved(ThemePreference::Light));
}

#[test]
fn readable_store_resolves_immediately() {
    let store = ThemeStore::shared(MemoryBackend::with_value(ThemePreference::Dark));
    let controller = ThemeController::new(store, SharedPhase::default());
    assert_eq!(controller.phase(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn unresolved_init_ignores_store_until_activated() {
    let store = ThemeStore::shared(MemoryBackend::with_value(ThemePreference::Dark));
    let mut controller = ThemeController::unresolved(store, SharedPhase::default());
    assert_eq!(controller.phase(), ThemePhase::Unresolved(ThemePreference::Light));
    assert!(!controller.is_active());

    assert_eq!(controller.activate(), ThemePhase::Resolved(ThemePreference::Dark));
    assert!(controller.is_active());
}

#[test]
fn activate_resolves_once_environment_appears() {
    let backend = Arc::new(MemoryBackend::unavailable());
    let store = ThemeStore::shared(backend.clone());
    let mut controller = ThemeController::new(store.clone(), SharedPhase::default());
    assert!(!controller.phase().is_resolved());

    backend.set_available(true);
    backend.save(ThemePreference::Dark).unwrap();
    assert_eq!(controller.activate(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn resolved_phase_never_reverts_on_failed_read() {
    let backend = Arc::new(MemoryBackend::with_value(ThemePreference::Dark));
    let store = ThemeStore::shared(backend.clone());
    let mut controller = ThemeController::new(store, SharedPhase::default());
    assert!(controller.phase().is_resolved());

    backend.set_available(false);
    assert_eq!(controller.activate(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn init_never_downgrades_a_resolved_cell() {
    let cell = SharedPhase::default();
    cell.set(ThemePhase::Resolved(ThemePreference::Dark));

    let _first = ThemeController::unresolved(ThemeStore::shared(MemoryBackend::new()), cell.clone());
    assert_eq!(cell.get(), ThemePhase::Resolved(ThemePreference::Dark));

    let _second = ThemeController::new(ThemeStore::shared(MemoryBackend::unavailable()), cell.clone());
    assert_eq!(cell.get(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn readable_store_overrides_a_resolved_cell() {
    let cell = SharedPhase::default();
    cell.set(ThemePhase::Resolved(ThemePreference::Dark));

    let controller = ThemeController::new(ThemeStore::shared(MemoryBackend::with_value(ThemePreference::Light)), cell);
    assert_eq!(controller.phase(), ThemePhase::Resolved(ThemePreference::Light));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_light_writes_dark_once_and_reconciles() {
    let backend = Arc::new(CountingBackend::default());
    let store = ThemeStore::shared(backend.clone());
    let mut controller = ThemeController::new(store, SharedPhase::default());
    controller.activate();
    assert_eq!(controller.current(), ThemePreference::Light);

    assert_eq!(controller.toggle(), Ok(ThemePreference::Dark));

    assert_eq!(*backend.saves.lock().unwrap(), vec![ThemePreference::Dark]);
    assert_eq!(controller.phase(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn repeated_toggles_alternate() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut controller = ThemeController::new(store, SharedPhase::default());
    controller.activate();

    for _ in 0..5 {
        let before = controller.current();
        controller.toggle().unwrap();
        assert_eq!(controller.current(), before.toggled());
    }
}

#[test]
fn toggle_without_subscription_leaves_local_state() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let controller = ThemeController::new(store.clone(), SharedPhase::default());

    controller.toggle().unwrap();

    assert_eq!(store.read(), Ok(ThemePreference::Dark));
    assert_eq!(controller.current(), ThemePreference::Light);
}

#[test]
fn unpersisted_toggle_still_flips_local_state() {
    let store = ThemeStore::shared(MemoryBackend::unavailable());
    let mut controller = ThemeController::new(store, SharedPhase::default());
    controller.activate();

    assert_eq!(controller.toggle(), Err(StoreError::Unavailable));
    assert_eq!(controller.phase(), ThemePhase::Resolved(ThemePreference::Dark));

    assert_eq!(controller.toggle(), Err(StoreError::Unavailable));
    assert_eq!(controller.current(), ThemePreference::Light);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn external_publish_updates_local_state() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut controller = ThemeController::new(store.clone(), SharedPhase::default());
    controller.activate();

    store.publish(ThemePreference::Dark);

    assert_eq!(controller.phase(), ThemePhase::Resolved(ThemePreference::Dark));
}

#[test]
fn second_controller_does_not_displace_first() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut a = ThemeController::new(store.clone(), SharedPhase::default());
    let mut b = ThemeController::new(store.clone(), SharedPhase::default());
    a.activate();
    b.activate();

    b.toggle().unwrap();

    assert_eq!(a.current(), ThemePreference::Dark);
    assert_eq!(b.current(), ThemePreference::Dark);
    assert_eq!(store.subscriber_count(), 2);
}

#[test]
fn dropping_controller_unsubscribes_it() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut a = ThemeController::new(store.clone(), SharedPhase::default());
    let mut b = ThemeController::new(store.clone(), SharedPhase::default());
    a.activate();
    b.activate();

    drop(a);
    store.write(ThemePreference::Dark).unwrap();

    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(b.current(), ThemePreference::Dark);
}

#[test]
fn reactivation_replaces_own_subscription() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut controller = ThemeController::new(store.clone(), SharedPhase::default());
    controller.activate();
    controller.activate();
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn last_write_wins() {
    let store = ThemeStore::shared(MemoryBackend::new());
    let mut controller = ThemeController::new(store.clone(), SharedPhase::default());
    controller.activate();

    store.write(ThemePreference::Dark).unwrap();
    store.publish(ThemePreference::Light);
    store.write(ThemePreference::Dark).unwrap();

    assert_eq!(controller.current(), ThemePreference::Dark);
}
