use super::*;
use crate::seo::site::is_iso_timestamp;

#[test]
fn one_entry_per_known_path() {
    let site = SiteConfig::default();
    let entries = sitemap(&site);
    assert_eq!(entries.len(), 12);
    let mut urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
    urls.sort_unstable();
    urls.dedup();
    assert_eq!(urls.len(), 12);
    assert_eq!(entries[0].url, "https://www.kona-verse.com/");
    assert_eq!(entries[0].priority, 1.0);
}

#[test]
fn priorities_and_timestamps_are_valid() {
    for e in sitemap(&SiteConfig::default()) {
        assert!((0.0..=1.0).contains(&e.priority), "{}", e.url);
        assert!(is_iso_timestamp(&e.last_modified), "{}", e.last_modified);
    }
}

#[test]
fn xml_lists_every_entry() {
    let entries = sitemap(&SiteConfig::default());
    let xml = sitemap_xml(&entries);
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
    assert_eq!(xml.matches("<url>").count(), 12);
    assert!(xml.contains("<loc>https://www.kona-verse.com/pricing</loc>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    assert!(xml.contains("<priority>1.0</priority>"));
}

#[test]
fn xml_escapes_urls() {
    let xml = sitemap_xml(&[SitemapEntry {
        url: "https://example.com/?a=1&b=2".to_owned(),
        last_modified: "2025-01-15T00:00:00.000Z".to_owned(),
        change_frequency: ChangeFrequency::Never,
        priority: 0.25,
    }]);
    assert!(xml.contains("?a=1&amp;b=2"));
    assert!(xml.contains("<changefreq>never</changefreq>"));
}

#[test]
fn change_frequency_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ChangeFrequency::Monthly).unwrap(),
        "\"monthly\""
    );
}
