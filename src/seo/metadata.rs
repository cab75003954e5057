use crate::seo::site::SiteConfig;

/// Input to [`build_metadata`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageDescriptor {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Site-relative path, e.g. `/about`.
    pub path: String,
    /// Meta keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Social preview image; the site default is used when absent.
    #[serde(default)]
    pub image: Option<String>,
}

impl PageDescriptor {
    /// Descriptor without keywords or image.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            keywords: Vec::new(),
            image: None,
        }
    }

    /// Add keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set the social preview image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Alternate URLs of a page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alternates {
    /// Canonical absolute URL.
    pub canonical: String,
}

/// One OpenGraph image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OgImage {
    /// Absolute image URL.
    pub url: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Alt text.
    pub alt: String,
}

/// OpenGraph mirror of the page metadata.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Canonical URL.
    pub url: String,
    /// Site name.
    pub site_name: String,
    /// Preview images.
    pub images: Vec<OgImage>,
    /// Locale.
    pub locale: String,
    /// Object type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Twitter card mirror of the page metadata.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TwitterCard {
    /// Card kind.
    pub card: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Absolute image URLs.
    pub images: Vec<String>,
    /// Author handle.
    pub creator: String,
}

/// Metadata object for one page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Canonical URL holder.
    pub alternates: Alternates,
    /// OpenGraph mirror.
    pub open_graph: OpenGraph,
    /// Twitter mirror.
    pub twitter: TwitterCard,
}

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// Join `path` onto the site base URL. Absolute URLs are returned unchanged.
pub fn absolute_url(site: &SiteConfig, path: &str) -> String {
    if path.starts_with("https://") || path.starts_with("http://") {
        return path.to_owned();
    }
    let base = site.base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Build the metadata object for `page`. Pure: equal inputs give equal outputs.
#[tracing::instrument(skip(site), fields(path = %page.path))]
pub fn build_metadata(site: &SiteConfig, page: &PageDescriptor) -> PageMetadata {
    let canonical = absolute_url(site, &page.path);
    let image = match page.image.as_deref() {
        Some(img) if !img.trim().is_empty() => absolute_url(site, img),
        _ => absolute_url(site, &site.default_image),
    };

    PageMetadata {
        title: page.title.clone(),
        description: page.description.clone(),
        keywords: page.keywords.clone(),
        alternates: Alternates {
            canonical: canonical.clone(),
        },
        open_graph: OpenGraph {
            title: page.title.clone(),
            description: page.description.clone(),
            url: canonical,
            site_name: site.name.clone(),
            images: vec![OgImage {
                url: image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: page.title.clone(),
            }],
            locale: site.locale.clone(),
            kind: "website".to_owned(),
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_owned(),
            title: page.title.clone(),
            description: page.description.clone(),
            images: vec![image],
            creator: site.twitter_handle.clone(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seo/metadata.rs"]
mod tests;
