//! Page layout wrapping header, main content, and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders inside this layout. It also owns the page's theme
//! controller: the first render uses the default preference so server and
//! hydrated markup agree, and the controller is activated once mounted in the
//! browser, which re-reads the stored preference and subscribes to changes.

use leptos::prelude::*;
use leptos_meta::{Html, Style, Title};
use theme::{SharedThemeStore, ThemeController};

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::site::SiteData;
use crate::state::theme::ThemeSignal;

/// Layout for all pages.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let data = expect_context::<SiteData>();
    let store = expect_context::<SharedThemeStore>();

    let theme = ThemeSignal::new();
    let controller = StoredValue::new(ThemeController::unresolved(store, theme));

    // Effects only run in the browser, after the first render.
    Effect::new(move || {
        controller.update_value(|c| {
            c.activate();
        });
    });

    view! {
        <Html {..} lang=data.settings.lang.clone() />
        <Title text=data.settings.title.clone() />
        <Style id="site-code-injection">{data.settings.codeinjection_styles.clone()}</Style>

        <div class="viewport">
            <div class="viewport-top">
                <SiteHeader controller=controller theme=theme />
                <main class="site-main">{children()}</main>
            </div>
            <div class="viewport-bottom">
                <SiteFooter />
            </div>
        </div>
    }
}
