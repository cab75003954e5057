use std::fmt::Write as _;

use crate::seo::metadata::absolute_url;
use crate::seo::pages::PAGES;
use crate::seo::site::SiteConfig;

/// sitemaps.org `changefreq` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes on every access.
    Always,
    /// Hourly.
    Hourly,
    /// Daily.
    Daily,
    /// Weekly.
    Weekly,
    /// Monthly.
    Monthly,
    /// Yearly.
    Yearly,
    /// Archived.
    Never,
}

impl ChangeFrequency {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// One `<url>` of the sitemap.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,
    /// ISO 8601 timestamp.
    pub last_modified: String,
    /// Expected change frequency.
    pub change_frequency: ChangeFrequency,
    /// Priority in `[0, 1]`.
    pub priority: f64,
}

/// One entry per known page, in registry order.
#[tracing::instrument(skip(site))]
pub fn sitemap(site: &SiteConfig) -> Vec<SitemapEntry> {
    PAGES
        .iter()
        .map(|page| SitemapEntry {
            url: absolute_url(site, page.path),
            last_modified: site.last_modified.clone(),
            change_frequency: page.change_frequency,
            priority: page.priority.clamp(0.0, 1.0),
        })
        .collect()
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&e.url),
            xml_escape(&e.last_modified),
            e.change_frequency.as_str(),
            e.priority,
        );
    }
    out.push_str("</urlset>\n");
    out
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/seo/sitemap.rs"]
mod tests;
