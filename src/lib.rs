//! Kona Verse site logic with testable contracts.
//!
//! Two independent halves:
//!
//! - A frame-driven decorative effect engine: [`EffectLoop`] drives any [`Effect`] from a
//!   [`Host`] frame callback and paints into a [`Surface`]. Instances: pointer-trail
//!   [`SplatterEffect`], [`StarfieldEffect`], [`RotatingGallery`], [`ParallaxEffect`].
//! - A pure metadata/SEO generator: [`build_metadata`], JSON-LD builders in [`seo::schema`],
//!   [`sitemap`] and [`robots`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing and scalar interpolation curves.
pub mod animation;
/// Decorative per-frame effects.
pub mod effects;
/// Responsive layout decisions.
pub mod layout;
/// Color parsing.
pub mod paint;
/// Drawing surfaces.
pub mod render;
/// Frame scheduling and effect lifecycle.
pub mod runtime;
/// Page metadata, structured data, sitemap and robots policy.
pub mod seo;

pub use crate::foundation::core::{
    Affine, BezPath, Point, Rect, Rgba8Premul, Tick, Vec2, Viewport, COMPACT_BREAKPOINT_PX,
};
pub use crate::foundation::error::{KonaError, KonaResult};
pub use crate::foundation::math::{angular_distance, wrap_degrees};

pub use crate::animation::curve::{Curve, Lerp};
pub use crate::animation::ease::Ease;
pub use crate::effects::gallery::{GalleryConfig, GalleryItem, ItemTransform, RotatingGallery};
pub use crate::effects::parallax::{
    ParallaxConfig, ParallaxCurves, ParallaxEffect, ParallaxFrame, ParallaxVariant,
    scroll_progress,
};
pub use crate::effects::splatter::{Splat, SplatterConfig, SplatterEffect};
pub use crate::effects::starfield::{NebulaCloud, Star, StarfieldConfig, StarfieldEffect};
pub use crate::layout::responsive::{CollapseProbe, should_collapse};
pub use crate::paint::color::ColorDef;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::surface::{DisplayList, DrawOp, FrameRGBA, Surface};
pub use crate::runtime::effect::{Effect, EffectLoop, LoopState};
pub use crate::runtime::event::{EventKind, InputEvent};
pub use crate::runtime::host::{FrameRequest, HeadlessHost, Host, ListenerId};
pub use crate::seo::metadata::{PageDescriptor, PageMetadata, absolute_url, build_metadata};
pub use crate::seo::pages::{PAGES, Page, page};
pub use crate::seo::robots::{RobotsPolicy, robots};
pub use crate::seo::schema::{
    BreadcrumbItem, ServiceDescriptor, breadcrumb_schema, json_ld_script, organization_schema,
    service_schema, website_schema,
};
pub use crate::seo::site::SiteConfig;
pub use crate::seo::sitemap::{ChangeFrequency, SitemapEntry, sitemap, sitemap_xml};
