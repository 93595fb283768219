//! Process-wide persisted theme preference with change notifications.
//!
//! DESIGN
//! ======
//! The store is an explicitly shared `Arc<ThemeStore>` handed to each
//! consumer. Persistence is delegated to a [`PreferenceBackend`] so the same
//! store runs in the browser (`localStorage`), during server rendering, and in
//! tests. Change notifications fan out to every live subscriber; registering
//! a subscriber never displaces another one.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::preference::ThemePreference;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Shared handle injected into every consumer of the preference.
pub type SharedThemeStore = Arc<ThemeStore>;

type Listener = Arc<dyn Fn(ThemePreference) + Send + Sync>;

/// Errors surfaced by a [`PreferenceBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No persistence environment exists (server rendering, storage disabled).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The environment exists but rejected the operation.
    #[error("preference storage failed: {0}")]
    Backend(String),
}

/// Where the preference is actually kept.
pub trait PreferenceBackend: Send + Sync {
    /// Load the stored preference. `Ok(None)` means nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be reached.
    fn load(&self) -> Result<Option<ThemePreference>, StoreError>;

    /// Persist `preference`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be reached or refuses the write.
    fn save(&self, preference: ThemePreference) -> Result<(), StoreError>;

    /// Preference used when nothing has been stored.
    fn system_default(&self) -> ThemePreference {
        ThemePreference::default()
    }
}

impl<T: PreferenceBackend + ?Sized> PreferenceBackend for Arc<T> {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        (**self).load()
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StoreError> {
        (**self).save(preference)
    }

    fn system_default(&self) -> ThemePreference {
        (**self).system_default()
    }
}

/// In-process backend used for server rendering and tests.
#[derive(Debug)]
pub struct MemoryBackend {
    value: Mutex<Option<ThemePreference>>,
    available: AtomicBool,
    system: ThemePreference,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self { value: Mutex::new(None), available: AtomicBool::new(true), system: ThemePreference::default() }
    }

    /// Backend that already holds `preference`.
    #[must_use]
    pub fn with_value(preference: ThemePreference) -> Self {
        Self { value: Mutex::new(Some(preference)), ..Self::new() }
    }

    /// Backend that behaves like a missing environment until made available.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { available: AtomicBool::new(false), ..Self::new() }
    }

    /// Override the fallback returned when nothing is stored.
    #[must_use]
    pub fn with_system_default(mut self, preference: ThemePreference) -> Self {
        self.system = preference;
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) { Ok(()) } else { Err(StoreError::Unavailable) }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        self.check_available()?;
        Ok(*self.value.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StoreError> {
        self.check_available()?;
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(preference);
        Ok(())
    }

    fn system_default(&self) -> ThemePreference {
        self.system
    }
}

/// Identity of one registered change subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    listeners: BTreeMap<SubscriberId, Listener>,
}

/// Persisted preference plus its subscriber registry.
pub struct ThemeStore {
    backend: Box<dyn PreferenceBackend>,
    subscribers: Mutex<Subscribers>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(backend: impl PreferenceBackend + 'static) -> Self {
        Self { backend: Box::new(backend), subscribers: Mutex::new(Subscribers::default()) }
    }

    /// Convenience for `Arc::new(ThemeStore::new(backend))`.
    #[must_use]
    pub fn shared(backend: impl PreferenceBackend + 'static) -> SharedThemeStore {
        Arc::new(Self::new(backend))
    }

    /// Current persisted preference, or the backend's fallback if none is stored.
    ///
    /// # Errors
    ///
    /// Propagates the backend error, typically [`StoreError::Unavailable`].
    pub fn read(&self) -> Result<ThemePreference, StoreError> {
        Ok(self.backend.load()?.unwrap_or_else(|| self.backend.system_default()))
    }

    /// Whether a preference has been explicitly stored.
    #[must_use]
    pub fn has_stored_preference(&self) -> bool {
        matches!(self.backend.load(), Ok(Some(_)))
    }

    /// Persist `preference` and notify every subscriber with it.
    ///
    /// Subscribers are notified even when the backend rejects the write, so
    /// the change still holds for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns the backend error after subscribers have been notified.
    pub fn write(&self, preference: ThemePreference) -> Result<(), StoreError> {
        let saved = self.backend.save(preference);
        self.publish(preference);
        saved
    }

    /// Notify subscribers of a change that did not go through [`Self::write`].
    pub fn publish(&self, preference: ThemePreference) {
        // Snapshot so listeners may re-enter the store.
        let listeners: Vec<Listener> = self.registry().listeners.values().cloned().collect();
        for listener in listeners {
            listener(preference);
        }
    }

    /// Register `listener`. It stays registered until the returned guard drops.
    pub fn subscribe(self: &Arc<Self>, listener: impl Fn(ThemePreference) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry();
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(listener));
        Subscription { store: Arc::downgrade(self), id }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry().listeners.len()
    }

    fn unsubscribe(&self, id: SubscriberId) {
        self.registry().listeners.remove(&id);
    }

    fn registry(&self) -> MutexGuard<'_, Subscribers> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore").field("subscribers", &self.subscriber_count()).finish_non_exhaustive()
    }
}

/// Guard for a registered subscriber. Dropping it unsubscribes.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<ThemeStore>,
    id: SubscriberId,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}
