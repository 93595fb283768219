//! Browser persistence and application of the theme preference.
//!
//! Reads and writes the preference in `localStorage`, falls back to the
//! system `prefers-color-scheme` when nothing is stored, and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment; without the `hydrate` feature the backend reports itself
//! unavailable so server rendering uses the default preference.

use theme::{PreferenceBackend, SharedThemeStore, StoreError, ThemePreference};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`PreferenceBackend`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StoreError::Backend(format!("{e:?}")))?
        .ok_or(StoreError::Unavailable)
}

impl PreferenceBackend for BrowserBackend {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = storage()?.get_item(STORAGE_KEY).map_err(|e| StoreError::Backend(format!("{e:?}")))?;
            // Unparseable values are treated as "nothing stored".
            Ok(raw.and_then(|val| val.parse().ok()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(STORAGE_KEY, preference.as_str())
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = preference;
            Err(StoreError::Unavailable)
        }
    }

    fn system_default(&self) -> ThemePreference {
        system_preference()
    }
}

/// The operating system's color scheme, `light` when unknown.
pub fn system_preference() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches());
        if dark { ThemePreference::Dark } else { ThemePreference::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(preference: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if let Err(e) = el.set_attribute("data-theme", preference.as_str()) {
                    log::warn!("failed to apply theme attribute: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preference;
    }
}

/// Publish system color-scheme changes while no explicit preference is stored.
///
/// The listener lives for the rest of the page.
pub fn watch_system_scheme(store: SharedThemeStore) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
            return;
        };
        let on_change = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |event: web_sys::MediaQueryListEvent| {
            if let Some(preference) = system_change_to_publish(store.has_stored_preference(), event.matches()) {
                store.publish(preference);
            }
        });
        if let Err(e) = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
            log::warn!("failed to watch system color scheme: {e:?}");
            return;
        }
        on_change.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

/// Preference to publish when the system scheme flips, if any.
///
/// An explicitly stored preference always wins over the system scheme.
pub fn system_change_to_publish(has_stored_preference: bool, system_dark: bool) -> Option<ThemePreference> {
    if has_stored_preference {
        return None;
    }
    Some(if system_dark { ThemePreference::Dark } else { ThemePreference::Light })
}
