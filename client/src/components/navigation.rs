//! CMS navigation entries rendered as a flat list of links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used twice per page: in the header bar and in the footer, each with its
//! own link class. Absolute `http(s)` URLs open in a new tab; everything else
//! goes through the client-side router.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::site::NavigationItem;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// How a navigation URL is followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Leaves the site; opened in a new tab.
    External,
    /// Path on this site; handled by the router.
    Internal,
}

/// Navigation links for `items`, each carrying `nav_class`.
#[component]
pub fn Navigation(items: Vec<NavigationItem>, #[prop(into)] nav_class: String) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            let class = nav_class.clone();
            match nav_target(&item.url) {
                NavTarget::External => view! {
                    <a class=class href=item.url target="_blank" rel="noopener noreferrer">
                        {item.label}
                    </a>
                }
                .into_any(),
                NavTarget::Internal => view! {
                    <A attr:class=class href=item.url>
                        {item.label}
                    </A>
                }
                .into_any(),
            }
        })
        .collect_view()
}

/// Classify `url`: leading whitespace is ignored and the scheme is matched
/// case-insensitively.
pub fn nav_target(url: &str) -> NavTarget {
    let url = url.trim_start();
    let is_http = ["http://", "https://"]
        .iter()
        .any(|scheme| url.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme)));
    if is_http { NavTarget::External } else { NavTarget::Internal }
}
