//! Reactive holder for a theme controller's local phase.
//!
//! DESIGN
//! ======
//! `ThemeController` writes its phase through [`PhaseCell`]; backing that with
//! an `RwSignal` makes every store notification re-render whatever reads the
//! signal. Controller-side reads are untracked so activating a controller
//! inside an effect does not make the effect depend on its own output.

use leptos::prelude::*;
use ::theme::{PhaseCell, ThemePhase, ThemePreference};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// [`PhaseCell`] over a Leptos signal.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSignal(RwSignal<ThemePhase>);

impl ThemeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(ThemePhase::default()))
    }

    /// Tracked read of the current preference, for use in views.
    #[must_use]
    pub fn preference(self) -> ThemePreference {
        self.0.get().preference()
    }

    #[must_use]
    pub fn signal(self) -> RwSignal<ThemePhase> {
        self.0
    }
}

impl Default for ThemeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseCell for ThemeSignal {
    fn get(&self) -> ThemePhase {
        self.0.get_untracked()
    }

    fn set(&self, phase: ThemePhase) {
        self.0.set(phase);
    }
}
