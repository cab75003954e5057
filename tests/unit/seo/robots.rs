use super::*;

#[test]
fn policy_matches_site() {
    let p = robots(&SiteConfig::default());
    assert_eq!(p.user_agent, "*");
    assert_eq!(p.allow, vec!["/".to_owned()]);
    assert_eq!(p.disallow, vec!["/test-parallax", "/journey", "/api/"]);
    assert_eq!(p.sitemap, "https://www.kona-verse.com/sitemap.xml");
}

#[test]
fn disallowed_prefixes_win_over_root_allow() {
    let p = robots(&SiteConfig::default());
    assert!(p.is_allowed("/"));
    assert!(p.is_allowed("/about"));
    assert!(!p.is_allowed("/api/contact"));
    assert!(!p.is_allowed("/journey"));
    assert!(!p.is_allowed("/test-parallax"));
    assert!(p.is_allowed("/apix"));
}

#[test]
fn text_rendering() {
    let text = robots(&SiteConfig::default()).to_text();
    assert_eq!(
        text,
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /test-parallax\n\
         Disallow: /journey\n\
         Disallow: /api/\n\
         \n\
         Sitemap: https://www.kona-verse.com/sitemap.xml\n"
    );
}
