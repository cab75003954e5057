//! schema.org JSON-LD builders.
//!
//! Every builder returns a plain [`serde_json::Value`]; object keys serialize in sorted
//! order, so output is byte-stable for equal input.

use serde_json::{Value, json};

use crate::seo::metadata::absolute_url;
use crate::seo::site::SiteConfig;

const CONTEXT: &str = "https://schema.org";

/// One breadcrumb step.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BreadcrumbItem {
    /// Display name.
    pub name: String,
    /// Site-relative path.
    pub href: String,
}

impl BreadcrumbItem {
    /// Breadcrumb step.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// A service offered on a solution page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceDescriptor {
    /// Service name.
    pub name: String,
    /// Service description.
    pub description: String,
    /// schema.org `serviceType`.
    pub service_type: String,
    /// Site-relative path of the page describing it.
    pub path: String,
}

/// `Organization` node.
pub fn organization_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": absolute_url(site, "/"),
        "logo": absolute_url(site, &site.logo),
        "description": site.description,
        "email": site.contact_email,
        "sameAs": site.social_profiles,
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer service",
            "email": site.contact_email,
        },
    })
}

/// `WebSite` node.
pub fn website_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": absolute_url(site, "/"),
        "description": site.description,
        "inLanguage": site.locale.replace('_', "-"),
        "publisher": {
            "@type": "Organization",
            "name": site.name,
        },
    })
}

/// `BreadcrumbList` node; positions run 1..N in input order.
pub fn breadcrumb_schema(site: &SiteConfig, items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
                "item": absolute_url(site, &item.href),
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// `Service` node provided by the site organization.
pub fn service_schema(site: &SiteConfig, service: &ServiceDescriptor) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "name": service.name,
        "description": service.description,
        "serviceType": service.service_type,
        "url": absolute_url(site, &service.path),
        "areaServed": "Worldwide",
        "provider": {
            "@type": "Organization",
            "name": site.name,
            "url": absolute_url(site, "/"),
        },
    })
}

/// Render `value` as a `<script type="application/ld+json">` tag.
///
/// `</` is escaped so string content cannot close the script element.
pub fn json_ld_script(value: &Value) -> String {
    let body = value.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{body}</script>"#)
}

#[cfg(test)]
#[path = "../../tests/unit/seo/schema.rs"]
mod tests;
