//! Footer with the credit line and a second copy of the navigation.

use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::state::site::{FooterCredit, SiteData};

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let data = expect_context::<SiteData>();
    let footer = data.settings.footer.clone();
    let link = (!footer.link_url.is_empty()).then(|| {
        view! {
            <a class="site-foot-nav-item" href=footer.link_url.clone() target="_blank" rel="noopener noreferrer">
                {footer.link_label.clone()}
            </a>
        }
    });

    view! {
        <footer class="site-foot">
            <div class="site-foot-nav container">
                <div class="site-foot-nav-left">
                    {footer.text.clone()}
                    " "
                    {link}
                    {copyright_suffix(&footer)}
                </div>
                <div class="site-foot-nav-right">
                    <Navigation items=data.settings.navigation.clone() nav_class="site-foot-nav-item" />
                </div>
            </div>
        </footer>
    }
}

/// ` © {year}` when a year is configured.
pub fn copyright_suffix(footer: &FooterCredit) -> String {
    footer.year.map(|year| format!(" © {year}")).unwrap_or_default()
}
