use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{KonaError, KonaResult};

/// Environment variable that overrides [`SiteConfig::base_url`].
pub const BASE_URL_ENV: &str = "KONA_BASE_URL";

/// Site-wide values shared by every generator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute origin without a trailing slash.
    pub base_url: String,
    /// Site and organization name.
    pub name: String,
    /// Organization description.
    pub description: String,
    /// Social preview image used when a page has none.
    pub default_image: String,
    /// OpenGraph locale.
    pub locale: String,
    /// Twitter handle including `@`.
    pub twitter_handle: String,
    /// Logo path or URL.
    pub logo: String,
    /// Public contact address.
    pub contact_email: String,
    /// Profile URLs listed as `sameAs`.
    pub social_profiles: Vec<String>,
    /// ISO 8601 timestamp stamped on every sitemap entry.
    pub last_modified: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.kona-verse.com".to_owned(),
            name: "Kona Verse".to_owned(),
            description: "Kona Verse is a creative digital agency building websites, brand \
                          identities and marketing campaigns."
                .to_owned(),
            default_image: "/images/og-image.jpg".to_owned(),
            locale: "en_US".to_owned(),
            twitter_handle: "@konaverse".to_owned(),
            logo: "/images/logo.png".to_owned(),
            contact_email: "hello@kona-verse.com".to_owned(),
            social_profiles: vec![
                "https://www.instagram.com/konaverse".to_owned(),
                "https://www.linkedin.com/company/kona-verse".to_owned(),
                "https://twitter.com/konaverse".to_owned(),
            ],
            last_modified: "2025-01-15T00:00:00.000Z".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> KonaResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.normalized()
    }

    /// Load a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> KonaResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read site config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Apply `KONA_BASE_URL` when set.
    pub fn with_env_overrides(self) -> KonaResult<Self> {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace the base URL when `base_url` is non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> KonaResult<Self> {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "base url overridden");
            self.base_url = url.trim().to_owned();
        }
        self.normalized()
    }

    /// Strip trailing slashes from the base URL, check it is absolute and that
    /// `last_modified` is an ISO 8601 timestamp.
    pub fn normalized(mut self) -> KonaResult<Self> {
        if !is_iso_timestamp(&self.last_modified) {
            return Err(KonaError::config(format!(
                "last_modified must be an ISO 8601 timestamp, got '{}'",
                self.last_modified
            )));
        }
        let trimmed = self.base_url.trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(h) if !h.is_empty() => {}
            _ => {
                return Err(KonaError::config(format!(
                    "base url must be an absolute http(s) origin, got '{}'",
                    self.base_url
                )));
            }
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }
}

/// `YYYY-MM-DDTHH:MM:SS[.fff](Z|±HH:MM)` with in-range fields.
pub fn is_iso_timestamp(s: &str) -> bool {
    let b = s.as_bytes();
    let num = |from: usize, len: usize| -> Option<u32> {
        let digits = b.get(from..from + len)?;
        digits.iter().try_fold(0u32, |acc, d| {
            d.is_ascii_digit().then(|| acc * 10 + u32::from(d - b'0'))
        })
    };
    let sep = |at: usize, c: u8| b.get(at) == Some(&c);

    let (Some(_year), Some(month), Some(day)) = (num(0, 4), num(5, 2), num(8, 2)) else {
        return false;
    };
    let (Some(hour), Some(minute), Some(second)) = (num(11, 2), num(14, 2), num(17, 2)) else {
        return false;
    };
    if !(sep(4, b'-') && sep(7, b'-') && sep(10, b'T') && sep(13, b':') && sep(16, b':')) {
        return false;
    }
    if !((1..=12).contains(&month) && (1..=31).contains(&day)) {
        return false;
    }
    if hour > 23 || minute > 59 || second > 60 {
        return false;
    }

    let mut i = 19;
    if sep(i, b'.') {
        i += 1;
        let start = i;
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    match b.get(i) {
        Some(b'Z') => i + 1 == b.len(),
        Some(b'+' | b'-') => {
            matches!((num(i + 1, 2), num(i + 4, 2)), (Some(h), Some(m)) if h <= 23 && m <= 59)
                && sep(i + 3, b':')
                && i + 6 == b.len()
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seo/site.rs"]
mod tests;
