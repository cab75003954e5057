use super::*;

fn site() -> SiteConfig {
    SiteConfig::default()
}

#[test]
fn canonical_joins_base_and_path() {
    let m = build_metadata(&site(), &PageDescriptor::new("T", "D", "/x"));
    assert_eq!(m.alternates.canonical, "https://www.kona-verse.com/x");
    assert_eq!(m.open_graph.url, m.alternates.canonical);
}

#[test]
fn is_pure() {
    let page = PageDescriptor::new("T", "D", "/x").with_keywords(["a", "b"]);
    let a = build_metadata(&site(), &page);
    let b = build_metadata(&site(), &page);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn image_defaults_to_site_image() {
    let m = build_metadata(&site(), &PageDescriptor::new("T", "D", "/x"));
    let expected = "https://www.kona-verse.com/images/og-image.jpg";
    assert_eq!(m.open_graph.images[0].url, expected);
    assert_eq!(m.twitter.images, vec![expected.to_owned()]);
}

#[test]
fn explicit_images_are_made_absolute() {
    let m = build_metadata(
        &site(),
        &PageDescriptor::new("T", "D", "/x").with_image("/images/work.png"),
    );
    assert_eq!(m.open_graph.images[0].url, "https://www.kona-verse.com/images/work.png");

    let m = build_metadata(
        &site(),
        &PageDescriptor::new("T", "D", "/x").with_image("https://cdn.example.com/a.png"),
    );
    assert_eq!(m.twitter.images[0], "https://cdn.example.com/a.png");
}

#[test]
fn serializes_with_camel_case_keys() {
    let m = build_metadata(&site(), &PageDescriptor::new("T", "D", "/x"));
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["alternates"]["canonical"], "https://www.kona-verse.com/x");
    assert_eq!(v["openGraph"]["siteName"], "Kona Verse");
    assert_eq!(v["openGraph"]["type"], "website");
    assert_eq!(v["twitter"]["card"], "summary_large_image");
    assert!(v.get("keywords").is_none());
}

#[test]
fn absolute_url_handles_missing_slash() {
    assert_eq!(absolute_url(&site(), "about"), "https://www.kona-verse.com/about");
    assert_eq!(absolute_url(&site(), "/"), "https://www.kona-verse.com/");
}
