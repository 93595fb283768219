//! Social profile icons on the right side of the site masthead.
//!
//! SYSTEM CONTEXT
//! ==============
//! Icon artwork depends on the active theme: the light theme uses the dark
//! PNG variants, every other theme the SVG originals. The Twitter link comes
//! from the CMS handle and is omitted entirely when no handle is set.

use leptos::prelude::*;
use theme::ThemePreference;

use crate::state::site::{SiteData, SiteSettings, SocialNetwork};
use crate::state::theme::ThemeSignal;

#[cfg(test)]
#[path = "social_links_test.rs"]
mod social_links_test;

/// One rendered social link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: String,
    pub alt: String,
}

/// Masthead social links, re-rendered when the theme changes.
#[component]
pub fn SocialLinks(theme: ThemeSignal) -> impl IntoView {
    let settings = expect_context::<SiteData>().settings;
    let links = social_links(&settings);

    links
        .into_iter()
        .map(|link| {
            let network = link.network;
            view! {
                <a class="site-nav-item" href=link.href target="_blank" rel="noopener noreferrer">
                    <img
                        class="site-nav-icon"
                        src=move || icon_src(network, theme.preference())
                        alt=link.alt
                    />
                </a>
            }
        })
        .collect_view()
}

/// Links in display order: Twitter (only with a handle), then configured profiles.
pub fn social_links(settings: &SiteSettings) -> Vec<SocialLink> {
    let twitter = settings.twitter.as_deref().and_then(twitter_url).map(|href| SocialLink {
        network: SocialNetwork::Twitter,
        href,
        alt: link_alt(SocialNetwork::Twitter, &settings.title),
    });
    let profiles = settings
        .profiles
        .iter()
        // The handle field is the single source for the Twitter link.
        .filter(|profile| profile.network != SocialNetwork::Twitter)
        .map(|profile| SocialLink {
            network: profile.network,
            href: profile.url.clone(),
            alt: link_alt(profile.network, &settings.title),
        });
    twitter.into_iter().chain(profiles).collect()
}

/// Profile URL for a Twitter handle, without one leading `@`.
pub fn twitter_url(handle: &str) -> Option<String> {
    let handle = handle.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    if handle.is_empty() {
        return None;
    }
    Some(format!("https://twitter.com/{handle}"))
}

/// Icon path for `network` under the given theme.
pub fn icon_src(network: SocialNetwork, theme: ThemePreference) -> String {
    let name = network.icon_name();
    match theme {
        ThemePreference::Light => format!("/images/icons/{name}-dark.png"),
        ThemePreference::Dark => format!("/images/icons/{name}.svg"),
    }
}

fn link_alt(network: SocialNetwork, title: &str) -> String {
    if title.is_empty() {
        network.display_name().to_owned()
    } else {
        format!("{} - {title}", network.display_name())
    }
}
