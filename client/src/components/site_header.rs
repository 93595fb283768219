//! Site masthead and navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The masthead shows the brand (site icon when the CMS has a logo, otherwise
//! the title and description), the theme switch, and the social links. Below
//! it the navigation bar lists CMS navigation on the left and the author page
//! button on the right.

use leptos::prelude::*;
use leptos_router::components::A;
use theme::ThemeController;

use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::navigation::Navigation;
use crate::components::social_links::SocialLinks;
use crate::state::site::{IconAsset, SiteData, SiteSettings};
use crate::state::theme::ThemeSignal;

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

/// What the brand slot of the masthead shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderBrand {
    /// Fixed-size site icon.
    Image { src: String, width: u32, height: u32, alt: String },
    /// Title and description as text.
    Text { title: String, description: String },
}

/// Header for every page.
#[component]
pub fn SiteHeader(controller: StoredValue<ThemeController<ThemeSignal>>, theme: ThemeSignal) -> impl IntoView {
    let data = expect_context::<SiteData>();
    let brand = match header_brand(&data.settings, &data.icon) {
        HeaderBrand::Image { src, width, height, alt } => view! {
            <img class="site-logo" src=src width=width height=height alt=alt />
        }
        .into_any(),
        HeaderBrand::Text { title, description } => view! {
            <div class="site-header-brand">
                <h1>{title}</h1>
                <p>{description}</p>
            </div>
        }
        .into_any(),
    };
    let author = data.settings.author.clone().map(|author| {
        view! {
            <A attr:class="site-nav-button" href=author.href()>
                {author.label}
            </A>
        }
    });

    view! {
        <header class="site-head">
            <div class="container">
                <div class="site-mast">
                    <div class="site-mast-left">
                        <A href="/">{brand}</A>
                    </div>
                    <DarkModeToggle controller=controller theme=theme />
                    <div class="site-mast-right">
                        <SocialLinks theme=theme />
                    </div>
                </div>
                <nav class="site-nav">
                    <div class="site-nav-left">
                        <Navigation items=data.settings.navigation.clone() nav_class="site-nav-item" />
                    </div>
                    <div class="site-nav-right">{author}</div>
                </nav>
            </div>
        </header>
    }
}

/// Brand for `settings`: the icon when a logo is configured, text otherwise.
pub fn header_brand(settings: &SiteSettings, icon: &IconAsset) -> HeaderBrand {
    if settings.logo.is_some() {
        HeaderBrand::Image {
            src: icon.src.clone(),
            width: icon.width,
            height: icon.height,
            alt: settings.title.clone(),
        }
    } else {
        HeaderBrand::Text { title: settings.title.clone(), description: settings.description.clone() }
    }
}
