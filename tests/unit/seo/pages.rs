use super::*;

#[test]
fn registry_paths_are_unique_and_rooted() {
    assert_eq!(PAGES.len(), 12);
    for (i, p) in PAGES.iter().enumerate() {
        assert!(p.path.starts_with('/'), "{}", p.path);
        assert!(PAGES[i + 1..].iter().all(|q| q.path != p.path && q.slug != p.slug));
    }
}

#[test]
fn breadcrumbs_start_home_and_end_at_page() {
    for p in PAGES {
        assert_eq!(p.breadcrumbs.first(), Some(&("Home", "/")));
        assert_eq!(p.breadcrumbs.last().map(|b| b.1), Some(p.path));
    }
}

#[test]
fn lookup_by_path() {
    assert_eq!(page("/work").map(|p| p.slug), Some("work"));
    assert!(page("/journey").is_none());
}

#[test]
fn home_carries_site_nodes() {
    let site = SiteConfig::default();
    let home = page("/").unwrap();
    let types: Vec<_> = home
        .structured_data(&site)
        .iter()
        .map(|v| v["@type"].as_str().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(types, vec!["Organization", "WebSite", "BreadcrumbList"]);
}

#[test]
fn solution_pages_carry_a_service() {
    let site = SiteConfig::default();
    let p = page("/solutions/brand-identity").unwrap();
    let nodes = p.structured_data(&site);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1]["@type"], "Service");
    assert_eq!(nodes[1]["serviceType"], "Branding");
}

#[test]
fn document_bundles_metadata_and_json_ld() {
    let site = SiteConfig::default();
    let doc = page("/about").unwrap().document(&site);
    assert_eq!(
        doc["metadata"]["alternates"]["canonical"],
        "https://www.kona-verse.com/about"
    );
    assert_eq!(doc["jsonLd"][0]["itemListElement"][1]["position"], 2);
    assert_eq!(doc["metadata"]["keywords"][0], "about");
}
