//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use theme::{SharedThemeStore, ThemeStore};

use crate::components::layout::Layout;
use crate::pages::home::HomePage;
use crate::state::site::{SITE_DATA_ELEMENT_ID, SiteData};
use crate::util::dark_mode::{self, BrowserBackend};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `data` is embedded as JSON so the hydrating client renders from the same
/// input as the server. The `lang` attribute is set by the layout's `<Html>`.
pub fn shell(options: LeptosOptions, data: SiteData) -> impl IntoView {
    let embedded = data.to_embedded_json().unwrap_or_else(|_| "null".to_owned());

    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=SITE_DATA_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App data/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site data and the shared theme store, then routes inside the
/// page layout.
#[component]
pub fn App(data: SiteData) -> impl IntoView {
    provide_meta_context();

    let store: SharedThemeStore = ThemeStore::shared(BrowserBackend);
    provide_context(data);
    provide_context(store.clone());

    // Keep `<html data-theme>` in step with every change, for as long as the app lives.
    let root_sync = store.subscribe(dark_mode::apply);
    on_cleanup(move || drop(root_sync));
    Effect::new({
        let store = store.clone();
        move || {
            if let Ok(preference) = store.read() {
                dark_mode::apply(preference);
            }
            dark_mode::watch_system_scheme(store.clone());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpress.css"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Layout>
        </Router>
    }
}
