use crate::seo::metadata::absolute_url;
use crate::seo::site::SiteConfig;

/// Paths crawlers are asked to skip.
pub const DISALLOWED_PATHS: [&str; 3] = ["/test-parallax", "/journey", "/api/"];

/// Crawl policy for `robots.txt`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsPolicy {
    /// User agent the rules apply to.
    pub user_agent: String,
    /// Allowed path prefixes.
    pub allow: Vec<String>,
    /// Disallowed path prefixes.
    pub disallow: Vec<String>,
    /// Absolute sitemap URL.
    pub sitemap: String,
}

impl RobotsPolicy {
    /// Whether a crawler following this policy may fetch `path`.
    ///
    /// The longest matching prefix wins; ties go to `Allow`.
    pub fn is_allowed(&self, path: &str) -> bool {
        let longest = |rules: &[String]| {
            rules
                .iter()
                .filter(|r| path.starts_with(r.as_str()))
                .map(String::len)
                .max()
        };
        match (longest(&self.allow), longest(&self.disallow)) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(a), Some(d)) => a >= d,
        }
    }

    /// `robots.txt` body.
    pub fn to_text(&self) -> String {
        let mut out = format!("User-agent: {}\n", self.user_agent);
        for p in &self.allow {
            out.push_str(&format!("Allow: {p}\n"));
        }
        for p in &self.disallow {
            out.push_str(&format!("Disallow: {p}\n"));
        }
        out.push_str(&format!("\nSitemap: {}\n", self.sitemap));
        out
    }
}

/// Site crawl policy.
pub fn robots(site: &SiteConfig) -> RobotsPolicy {
    RobotsPolicy {
        user_agent: "*".to_owned(),
        allow: vec!["/".to_owned()],
        disallow: DISALLOWED_PATHS.iter().map(|p| (*p).to_owned()).collect(),
        sitemap: absolute_url(site, "/sitemap.xml"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seo/robots.rs"]
mod tests;
