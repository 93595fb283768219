//! View-side mirror of the persisted theme preference.
//!
//! DESIGN
//! ======
//! A controller renders before the persisted value is necessarily reachable
//! (server rendering, hydration), so its local state is an explicit
//! [`ThemePhase`]: `Unresolved(default)` until the first successful read or
//! change notification, `Resolved(actual)` afterwards. Toggling only writes to
//! the store; the local copy is reconciled through the store's notification,
//! which keeps it equal to the last persisted value.

use std::sync::{Arc, Mutex, PoisonError};

use crate::preference::ThemePreference;
use crate::store::{SharedThemeStore, StoreError, Subscription};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Initialization state of a controller's local preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePhase {
    /// Persisted value not read yet; carries the default rendered meanwhile.
    Unresolved(ThemePreference),
    /// Value confirmed by a read or a change notification.
    Resolved(ThemePreference),
}

impl ThemePhase {
    #[must_use]
    pub const fn preference(self) -> ThemePreference {
        match self {
            Self::Unresolved(p) | Self::Resolved(p) => p,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl Default for ThemePhase {
    fn default() -> Self {
        Self::Unresolved(ThemePreference::default())
    }
}

/// Holder of a controller's local phase.
///
/// Implemented over a reactive signal in the UI so that every update
/// re-renders; [`SharedPhase`] is the plain implementation.
pub trait PhaseCell: Clone + Send + Sync + 'static {
    fn get(&self) -> ThemePhase;
    fn set(&self, phase: ThemePhase);
}

/// Mutex-backed [`PhaseCell`].
#[derive(Clone, Debug, Default)]
pub struct SharedPhase(Arc<Mutex<ThemePhase>>);

impl PhaseCell for SharedPhase {
    fn get(&self) -> ThemePhase {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, phase: ThemePhase) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }
}

/// Keeps a view's theme in step with the shared [`ThemeStore`](crate::ThemeStore).
pub struct ThemeController<C: PhaseCell> {
    store: SharedThemeStore,
    cell: C,
    subscription: Option<Subscription>,
}

impl<C: PhaseCell> ThemeController<C> {
    /// First-phase init: resolve from the store when it is readable, otherwise
    /// start from the default preference.
    ///
    /// A cell that is already resolved keeps its value when the read fails.
    pub fn new(store: SharedThemeStore, cell: C) -> Self {
        match store.read() {
            Ok(preference) => cell.set(ThemePhase::Resolved(preference)),
            Err(_) => reset_unresolved(&cell),
        }
        Self { store, cell, subscription: None }
    }

    /// First-phase init that never touches the store.
    ///
    /// Used when the first render has to match markup produced without a store.
    /// A cell that is already resolved is left as it is.
    pub fn unresolved(store: SharedThemeStore, cell: C) -> Self {
        reset_unresolved(&cell);
        Self { store, cell, subscription: None }
    }

    /// Second-phase init: subscribe to changes, then re-read the store.
    ///
    /// Calling it again replaces this controller's own subscription and leaves
    /// other subscribers untouched. A failed read keeps the current phase.
    pub fn activate(&mut self) -> ThemePhase {
        let cell = self.cell.clone();
        // Drop the old guard before registering so the count never doubles.
        self.subscription = None;
        self.subscription = Some(self.store.subscribe(move |preference| cell.set(ThemePhase::Resolved(preference))));

        if let Ok(preference) = self.store.read() {
            self.cell.set(ThemePhase::Resolved(preference));
        }
        self.cell.get()
    }

    /// Write the complement of the current preference to the store.
    ///
    /// Local state changes only once the store notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns the store error when the write is not persisted. Subscribers,
    /// this controller included, have still been notified of `next`.
    pub fn toggle(&self) -> Result<ThemePreference, StoreError> {
        let next = self.current().toggled();
        self.store.write(next)?;
        Ok(next)
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.cell.get().preference()
    }

    #[must_use]
    pub fn phase(&self) -> ThemePhase {
        self.cell.get()
    }

    /// Whether [`Self::activate`] has registered a subscriber.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

}

fn reset_unresolved(cell: &impl PhaseCell) {
    if !cell.get().is_resolved() {
        cell.set(ThemePhase::default());
    }
}
