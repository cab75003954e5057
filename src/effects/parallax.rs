use crate::animation::curve::Curve;
use crate::animation::ease::Ease;
use crate::foundation::core::{Affine, Rect, Rgba8Premul, Tick, Viewport};
use crate::foundation::error::{KonaError, KonaResult};
use crate::paint::color::ColorDef;
use crate::render::surface::Surface;
use crate::runtime::effect::Effect;
use crate::runtime::event::{EventKind, InputEvent};

/// Normalized progress of a section through the viewport.
///
/// 0 while the section top is at or below the viewport bottom, 1 once the section bottom
/// has passed the viewport top. Non-finite input yields 0.
pub fn scroll_progress(
    scroll_y: f64,
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
) -> f64 {
    let start = section_top - viewport_height;
    let end = section_top + section_height;
    let span = end - start;
    if !(scroll_y.is_finite() && start.is_finite() && span.is_finite()) {
        return 0.0;
    }
    if span <= 0.0 {
        return if scroll_y < start { 0.0 } else { 1.0 };
    }
    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// The two configured scroll treatments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallaxVariant {
    /// Image zooms in while the overlay darkens and content fades in.
    #[default]
    ZoomInReveal,
    /// Image zooms out while the overlay lifts and content fades out.
    ZoomOutFade,
}

/// Scale, overlay and content curves of one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxCurves {
    /// Image scale factor.
    pub scale: Curve,
    /// Overlay opacity.
    pub overlay: Curve,
    /// Content opacity.
    pub content: Curve,
}

impl ParallaxVariant {
    /// Compact viewports (touch or narrow) get [`ParallaxVariant::ZoomOutFade`].
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.prefers_compact() {
            Self::ZoomOutFade
        } else {
            Self::ZoomInReveal
        }
    }

    /// Curves driven by scroll progress.
    pub fn curves(self) -> ParallaxCurves {
        match self {
            Self::ZoomInReveal => ParallaxCurves {
                scale: Curve::new([0.0, 1.0], [1.0, 1.4]).with_ease(Ease::InOutQuad),
                overlay: Curve::new([0.0, 0.6], [0.0, 0.55]),
                content: Curve::new([0.3, 0.8], [0.0, 1.0]).with_ease(Ease::OutCubic),
            },
            Self::ZoomOutFade => ParallaxCurves {
                scale: Curve::new([0.0, 1.0], [1.3, 1.0]).with_ease(Ease::OutQuad),
                overlay: Curve::new([0.0, 1.0], [0.6, 0.2]),
                content: Curve::new([0.2, 0.7], [1.0, 0.0]).with_ease(Ease::InQuad),
            },
        }
    }
}

/// Derived values for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Progress the values were sampled at.
    pub progress: f64,
    /// Image scale factor.
    pub scale: f64,
    /// Overlay opacity in `[0, 1]`.
    pub overlay_opacity: f64,
    /// Content opacity in `[0, 1]`.
    pub content_opacity: f64,
}

impl ParallaxCurves {
    /// Sample all three curves at `progress`.
    pub fn sample(&self, progress: f64) -> ParallaxFrame {
        ParallaxFrame {
            progress,
            scale: self.scale.sample(progress),
            overlay_opacity: self.overlay.sample(progress).clamp(0.0, 1.0),
            content_opacity: self.content.sample(progress).clamp(0.0, 1.0),
        }
    }
}

/// Section geometry and colors for [`ParallaxEffect`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Section top in document coordinates.
    pub section_top: f64,
    /// Section height in pixels.
    pub section_height: f64,
    /// Forces a variant instead of choosing one from the viewport at mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ParallaxVariant>,
    /// Stand-in color for the section image.
    pub image_color: String,
    /// Overlay color.
    pub overlay_color: String,
    /// Content band color.
    pub content_color: String,
    /// Content band size as a fraction of the viewport.
    pub content_band: [f64; 2],
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            section_top: 720.0,
            section_height: 1440.0,
            variant: None,
            image_color: "#1e3a8a".to_owned(),
            overlay_color: "#000000".to_owned(),
            content_color: "#f8fafc".to_owned(),
            content_band: [0.6, 0.2],
        }
    }
}

impl ParallaxConfig {
    /// Reject geometry that makes progress meaningless.
    pub fn validate(&self) -> KonaResult<()> {
        if !(self.section_top.is_finite() && self.section_height.is_finite()) {
            return Err(KonaError::config("section geometry must be finite"));
        }
        if self.section_height < 0.0 {
            return Err(KonaError::config("section_height must be >= 0"));
        }
        if !self.content_band.iter().all(|f| (0.0..=1.0).contains(f)) {
            return Err(KonaError::config("content_band fractions must be within [0, 1]"));
        }
        Ok(())
    }
}

/// Scroll-linked zoom and fade over one section.
///
/// The variant is picked once at mount. Resizes update geometry only.
#[derive(Debug)]
pub struct ParallaxEffect {
    cfg: ParallaxConfig,
    variant: ParallaxVariant,
    curves: ParallaxCurves,
    viewport: Viewport,
    scroll_y: f64,
    colors: [ColorDef; 3],
}

impl ParallaxEffect {
    /// Effect over the configured section.
    pub fn new(cfg: ParallaxConfig) -> Self {
        let variant = cfg.variant.unwrap_or_default();
        Self {
            cfg,
            variant,
            curves: variant.curves(),
            viewport: Viewport::default(),
            scroll_y: 0.0,
            colors: [ColorDef::FALLBACK; 3],
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ParallaxConfig {
        &self.cfg
    }

    /// Variant selected at mount.
    pub fn variant(&self) -> ParallaxVariant {
        self.variant
    }

    /// Latest scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Current scroll progress.
    pub fn progress(&self) -> f64 {
        scroll_progress(
            self.scroll_y,
            self.cfg.section_top,
            self.cfg.section_height,
            self.viewport.height,
        )
    }

    /// Derived values for the current scroll position.
    pub fn frame(&self) -> ParallaxFrame {
        self.curves.sample(self.progress())
    }

    /// Record a new scroll offset; non-finite offsets are ignored.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y;
        }
    }
}

impl Effect for ParallaxEffect {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::Scroll, EventKind::Resize]
    }

    #[tracing::instrument(skip(self), fields(effect = "parallax"))]
    fn mount(&mut self, viewport: Viewport) -> KonaResult<()> {
        self.cfg.validate()?;
        self.variant = self
            .cfg
            .variant
            .unwrap_or_else(|| ParallaxVariant::for_viewport(viewport));
        self.curves = self.variant.curves();
        self.viewport = viewport;
        self.scroll_y = 0.0;
        self.colors = [
            ColorDef::parse_or_default(&self.cfg.image_color),
            ColorDef::parse_or_default(&self.cfg.overlay_color),
            ColorDef::parse_or_default(&self.cfg.content_color),
        ];
        tracing::debug!(variant = ?self.variant, "parallax variant selected");
        Ok(())
    }

    fn unmount(&mut self) {
        self.scroll_y = 0.0;
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Scroll { scroll_y } => self.on_scroll(*scroll_y),
            InputEvent::Resize(viewport) => self.viewport = *viewport,
            _ => {}
        }
    }

    fn update(&mut self, _tick: &Tick) {}

    fn draw(&self, surface: &mut dyn Surface) {
        let f = self.frame();
        let vp = self.viewport;
        let full = Rect::new(0.0, 0.0, vp.width, vp.height);
        let [image, overlay, content] = self.colors;

        surface.clear(Rgba8Premul::transparent());
        surface.fill_rect(
            full,
            Affine::scale_about(f.scale, vp.center()),
            image.to_rgba8_premul(),
        );
        surface.fill_rect(
            full,
            Affine::IDENTITY,
            overlay.with_opacity(f.overlay_opacity).to_rgba8_premul(),
        );
        let [bw, bh] = self.cfg.content_band;
        let band = Rect::from_center_size(vp.center(), (vp.width * bw, vp.height * bh));
        surface.fill_rect(
            band,
            Affine::IDENTITY,
            content.with_opacity(f.content_opacity).to_rgba8_premul(),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/parallax.rs"]
mod tests;
