/// Page metadata with canonical URL and social mirrors.
pub mod metadata;
/// Known pages of the site.
pub mod pages;
/// `robots.txt` policy.
pub mod robots;
/// JSON-LD structured data.
pub mod schema;
/// Site-wide configuration.
pub mod site;
/// Sitemap listing.
pub mod sitemap;
