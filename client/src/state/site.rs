//! Resolved CMS settings and the site icon handed to the layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server deserializes [`SiteData`] from the site data file, renders with
//! it, and embeds it as JSON in the HTML shell so hydration sees the exact
//! same input. Nothing here is mutated after load.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// `id` of the `<script type="application/json">` element carrying [`SiteData`].
pub const SITE_DATA_ELEMENT_ID: &str = "site-data";

/// Everything the layout renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    pub settings: SiteSettings,
    #[serde(default)]
    pub icon: IconAsset,
}

impl SiteData {
    /// JSON safe to place inside a `<script>` element.
    ///
    /// # Errors
    ///
    /// Returns the serializer error (not expected for plain string data).
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    /// Parse the JSON produced by [`Self::to_embedded_json`].
    ///
    /// # Errors
    ///
    /// Returns the deserializer error for malformed input.
    pub fn from_embedded_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Site-wide settings as published by the CMS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Presence switches the header brand from text to image.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Twitter handle, with or without a leading `@`.
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub codeinjection_styles: String,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub profiles: Vec<SocialProfile>,
    #[serde(default)]
    pub author: Option<AuthorLink>,
    #[serde(default)]
    pub footer: FooterCredit,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            logo: None,
            lang: default_lang(),
            twitter: None,
            codeinjection_styles: String::new(),
            navigation: Vec::new(),
            profiles: Vec::new(),
            author: None,
            footer: FooterCredit::default(),
        }
    }
}

fn default_lang() -> String {
    "en".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub url: String,
}

/// Social networks with an icon pair under `/images/icons/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Twitter,
    Linkedin,
    Github,
}

impl SocialNetwork {
    /// File stem of the network's icons.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
        }
    }
}

/// Always-present profile link in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub network: SocialNetwork,
    pub url: String,
}

/// Author page button on the right of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLink {
    pub label: String,
    pub slug: String,
}

impl AuthorLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/author/{}", self.slug.trim_matches('/'))
    }
}

/// Footer credit line: `{text} <a href={link_url}>{link_label}</a> © {year}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCredit {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link_label: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default)]
    pub year: Option<u16>,
}

/// Fixed-size site icon rendered as the header brand image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    pub src: String,
    #[serde(default = "default_icon_size")]
    pub width: u32,
    #[serde(default = "default_icon_size")]
    pub height: u32,
}

const fn default_icon_size() -> u32 {
    30
}

impl Default for IconAsset {
    fn default() -> Self {
        Self { src: "/images/site-icon.png".to_owned(), width: default_icon_size(), height: default_icon_size() }
    }
}
