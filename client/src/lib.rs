//! # client
//!
//! Leptos + WASM site layout: header with theme switch and social links,
//! navigation, and footer around CMS-provided content.
//!
//! The same crate is compiled twice: with `ssr` into the server, which renders
//! the HTML shell, and with `hydrate` into WASM, which takes over the rendered
//! page in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::state::site::{SITE_DATA_ELEMENT_ID, SiteData};

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(SITE_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        log::error!("#{SITE_DATA_ELEMENT_ID} missing from page; not hydrating");
        return;
    };
    let data = match SiteData::from_embedded_json(&raw) {
        Ok(data) => data,
        Err(e) => {
            log::error!("invalid embedded site data: {e}");
            return;
        }
    };

    leptos::mount::hydrate_body(move || leptos::view! { <App data/> });
}
