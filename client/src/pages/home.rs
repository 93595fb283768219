//! Landing page placeholder until post listings are wired to the CMS.

use leptos::prelude::*;

use crate::state::site::SiteData;

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = expect_context::<SiteData>().settings;

    view! {
        <div class="container">
            <section class="home-intro">
                <h2>{settings.title}</h2>
                <p>{settings.description}</p>
            </section>
        </div>
    }
}
