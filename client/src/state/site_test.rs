use super::*;

fn sample() -> SiteData {
    SiteData {
        settings: SiteSettings {
            title: "Field Notes".to_owned(),
            description: "Writing about </script> tags".to_owned(),
            twitter: Some("@notes".to_owned()),
            navigation: vec![NavigationItem { label: "Home".to_owned(), url: "/".to_owned() }],
            ..SiteSettings::default()
        },
        icon: IconAsset::default(),
    }
}

#[test]
fn settings_default_lang_is_en() {
    assert_eq!(SiteSettings::default().lang, "en");
}

#[test]
fn icon_defaults_to_thirty_pixels_square() {
    let icon = IconAsset::default();
    assert_eq!((icon.width, icon.height), (30, 30));
}

#[test]
fn embedded_json_escapes_closing_tags() {
    let json = sample().to_embedded_json().unwrap();
    assert!(!json.contains("</"));
    assert!(json.contains("<\\/script>"));
}

#[test]
fn embedded_json_parses_back() {
    let data = sample();
    let json = data.to_embedded_json().unwrap();
    assert_eq!(SiteData::from_embedded_json(&json).unwrap(), data);
}

#[test]
fn minimal_json_fills_defaults() {
    let data = SiteData::from_embedded_json(r#"{"settings":{"title":"T"}}"#).unwrap();
    assert_eq!(data.settings.title, "T");
    assert_eq!(data.settings.logo, None);
    assert_eq!(data.settings.twitter, None);
    assert!(data.settings.navigation.is_empty());
    assert_eq!(data.icon, IconAsset::default());
}

#[test]
fn social_network_uses_lowercase_names() {
    let profile: SocialProfile =
        serde_json::from_str(r#"{"network":"linkedin","url":"https://linkedin.com/in/x"}"#).unwrap();
    assert_eq!(profile.network, SocialNetwork::Linkedin);
    assert_eq!(profile.network.icon_name(), "linkedin");
}

#[test]
fn author_href_normalizes_slashes() {
    let author = AuthorLink { label: "About".to_owned(), slug: "/jane/".to_owned() };
    assert_eq!(author.href(), "/author/jane");
}
