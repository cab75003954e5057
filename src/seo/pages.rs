use serde_json::{Value, json};

use crate::seo::metadata::{PageDescriptor, PageMetadata, build_metadata};
use crate::seo::schema::{
    BreadcrumbItem, ServiceDescriptor, breadcrumb_schema, organization_schema, service_schema,
    website_schema,
};
use crate::seo::site::SiteConfig;
use crate::seo::sitemap::ChangeFrequency;

/// Service advertised by a solution page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageService {
    /// Service name.
    pub name: &'static str,
    /// schema.org `serviceType`.
    pub service_type: &'static str,
}

/// A known static page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    /// File-safe identifier.
    pub slug: &'static str,
    /// Site-relative path.
    pub path: &'static str,
    /// Title.
    pub title: &'static str,
    /// Meta description.
    pub description: &'static str,
    /// Meta keywords.
    pub keywords: &'static [&'static str],
    /// Sitemap priority.
    pub priority: f64,
    /// Sitemap change frequency.
    pub change_frequency: ChangeFrequency,
    /// Trail from the home page, `(name, href)`, ending at this page.
    pub breadcrumbs: &'static [(&'static str, &'static str)],
    /// Service described by the page, if any.
    pub service: Option<PageService>,
}

const HOME: (&str, &str) = ("Home", "/");
const SOLUTIONS: (&str, &str) = ("Solutions", "/solutions");

/// Every static page, in sitemap order.
pub static PAGES: &[Page] = &[
    Page {
        slug: "home",
        path: "/",
        title: "Kona Verse | Creative Digital Agency",
        description: "Websites, brand identities and digital marketing crafted by Kona Verse.",
        keywords: &["digital agency", "web design", "branding", "marketing"],
        priority: 1.0,
        change_frequency: ChangeFrequency::Weekly,
        breadcrumbs: &[HOME],
        service: None,
    },
    Page {
        slug: "about",
        path: "/about",
        title: "About | Kona Verse",
        description: "Meet the team and the story behind Kona Verse.",
        keywords: &["about", "team", "creative studio"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, ("About", "/about")],
        service: None,
    },
    Page {
        slug: "contact",
        path: "/contact",
        title: "Contact | Kona Verse",
        description: "Start a project with Kona Verse.",
        keywords: &["contact", "project inquiry"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, ("Contact", "/contact")],
        service: None,
    },
    Page {
        slug: "pricing",
        path: "/pricing",
        title: "Pricing | Kona Verse",
        description: "Transparent packages for websites, branding and marketing.",
        keywords: &["pricing", "packages", "web design cost"],
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        breadcrumbs: &[HOME, ("Pricing", "/pricing")],
        service: None,
    },
    Page {
        slug: "solutions",
        path: "/solutions",
        title: "Solutions | Kona Verse",
        description: "Web development, brand identity and digital marketing solutions.",
        keywords: &["solutions", "services"],
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        breadcrumbs: &[HOME, SOLUTIONS],
        service: None,
    },
    Page {
        slug: "solutions-web-development",
        path: "/solutions/web-development",
        title: "Web Development | Kona Verse",
        description: "Fast, accessible websites and web applications built to convert.",
        keywords: &["web development", "websites", "web apps"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, SOLUTIONS, ("Web Development", "/solutions/web-development")],
        service: Some(PageService {
            name: "Web Development",
            service_type: "Web Development",
        }),
    },
    Page {
        slug: "solutions-brand-identity",
        path: "/solutions/brand-identity",
        title: "Brand Identity | Kona Verse",
        description: "Logos, visual systems and brand guidelines that stand out.",
        keywords: &["brand identity", "logo design", "branding"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, SOLUTIONS, ("Brand Identity", "/solutions/brand-identity")],
        service: Some(PageService {
            name: "Brand Identity",
            service_type: "Branding",
        }),
    },
    Page {
        slug: "solutions-digital-marketing",
        path: "/solutions/digital-marketing",
        title: "Digital Marketing | Kona Verse",
        description: "Campaigns, SEO and social strategy that grow your audience.",
        keywords: &["digital marketing", "seo", "social media"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[
            HOME,
            SOLUTIONS,
            ("Digital Marketing", "/solutions/digital-marketing"),
        ],
        service: Some(PageService {
            name: "Digital Marketing",
            service_type: "Digital Marketing",
        }),
    },
    Page {
        slug: "case-studies",
        path: "/case-studies",
        title: "Case Studies | Kona Verse",
        description: "How Kona Verse helped clients launch and grow.",
        keywords: &["case studies", "results", "clients"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Weekly,
        breadcrumbs: &[HOME, ("Case Studies", "/case-studies")],
        service: None,
    },
    Page {
        slug: "work",
        path: "/work",
        title: "Our Work | Kona Verse",
        description: "Selected projects across web, brand and campaign work.",
        keywords: &["portfolio", "work", "projects"],
        priority: 0.8,
        change_frequency: ChangeFrequency::Weekly,
        breadcrumbs: &[HOME, ("Work", "/work")],
        service: None,
    },
    Page {
        slug: "projects-web-design",
        path: "/projects/web-design",
        title: "Web Design Projects | Kona Verse",
        description: "A gallery of websites designed and built by Kona Verse.",
        keywords: &["web design portfolio", "websites"],
        priority: 0.7,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, ("Work", "/work"), ("Web Design", "/projects/web-design")],
        service: None,
    },
    Page {
        slug: "projects-branding",
        path: "/projects/branding",
        title: "Branding Projects | Kona Verse",
        description: "Brand identities and visual systems created by Kona Verse.",
        keywords: &["branding portfolio", "identity design"],
        priority: 0.7,
        change_frequency: ChangeFrequency::Monthly,
        breadcrumbs: &[HOME, ("Work", "/work"), ("Branding", "/projects/branding")],
        service: None,
    },
];

/// Look up a page by path.
pub fn page(path: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.path == path)
}

impl Page {
    /// Metadata input for this page.
    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::new(self.title, self.description, self.path)
            .with_keywords(self.keywords.iter().copied())
    }

    /// Metadata for this page.
    pub fn metadata(&self, site: &SiteConfig) -> PageMetadata {
        build_metadata(site, &self.descriptor())
    }

    /// Breadcrumb trail.
    pub fn breadcrumb_items(&self) -> Vec<BreadcrumbItem> {
        self.breadcrumbs
            .iter()
            .map(|(name, href)| BreadcrumbItem::new(*name, *href))
            .collect()
    }

    /// JSON-LD nodes embedded in this page.
    ///
    /// The home page carries `Organization` and `WebSite`; every page carries its
    /// `BreadcrumbList`; solution pages add their `Service`.
    pub fn structured_data(&self, site: &SiteConfig) -> Vec<Value> {
        let mut nodes = Vec::new();
        if self.path == "/" {
            nodes.push(organization_schema(site));
            nodes.push(website_schema(site));
        }
        nodes.push(breadcrumb_schema(site, &self.breadcrumb_items()));
        if let Some(service) = self.service {
            nodes.push(service_schema(
                site,
                &ServiceDescriptor {
                    name: service.name.to_owned(),
                    description: self.description.to_owned(),
                    service_type: service.service_type.to_owned(),
                    path: self.path.to_owned(),
                },
            ));
        }
        nodes
    }

    /// Metadata and structured data as one JSON document.
    pub fn document(&self, site: &SiteConfig) -> Value {
        json!({
            "path": self.path,
            "metadata": self.metadata(site),
            "jsonLd": self.structured_data(site),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seo/pages.rs"]
mod tests;
