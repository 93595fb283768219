//! Light/dark switch in the masthead.
//!
//! SYSTEM CONTEXT
//! ==============
//! The checkbox is checked while the light theme is active. Changing it asks
//! the controller to write the opposite preference; the visible state follows
//! once the store notifies the controller, which it does even when the
//! preference could not be persisted.

use leptos::prelude::*;
use theme::{StoreError, ThemeController, ThemePreference};

use crate::state::theme::ThemeSignal;

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

/// Checkbox plus styled label acting as the theme switch.
#[component]
pub fn DarkModeToggle(controller: StoredValue<ThemeController<ThemeSignal>>, theme: ThemeSignal) -> impl IntoView {
    let checked = move || is_checked(theme.preference());
    let on_change = move |_| {
        if let Some(Err(e)) = controller.try_with_value(ThemeController::toggle) {
            report_toggle_error(&e);
        }
    };

    view! {
        <div class="dark-mode">
            <input
                type="checkbox"
                class="checkbox"
                id="checkbox"
                checked=checked
                prop:checked=checked
                on:change=on_change
                aria-label=move || toggle_label(theme.preference())
            />
            <label class="switch" for="checkbox"></label>
        </div>
    }
}

/// Checkbox state for `theme`.
pub fn is_checked(theme: ThemePreference) -> bool {
    theme.is_light()
}

/// Accessible label describing what the switch will do.
pub fn toggle_label(theme: ThemePreference) -> &'static str {
    match theme.toggled() {
        ThemePreference::Light => "Switch to light theme",
        ThemePreference::Dark => "Switch to dark theme",
    }
}

fn report_toggle_error(err: &StoreError) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("theme toggle not persisted: {err}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}
