//! Light/dark theme preference model, persisted store, and view controller.
//!
//! This crate owns the only stateful logic of the site layout. It has no UI
//! dependencies: the `client` crate plugs a browser-backed
//! [`PreferenceBackend`] into a [`ThemeStore`] and drives a
//! [`ThemeController`] whose local state lives in a reactive signal.

pub mod controller;
pub mod preference;
pub mod store;

pub use controller::{PhaseCell, SharedPhase, ThemeController, ThemePhase};
pub use preference::{ParsePreferenceError, ThemePreference};
pub use store::{
    MemoryBackend, PreferenceBackend, SharedThemeStore, StoreError, SubscriberId, Subscription, ThemeStore,
};
