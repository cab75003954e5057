use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul, Tick, Vec2, Viewport};
use crate::foundation::error::{KonaError, KonaResult};
use crate::foundation::math::{angular_distance, wrap_degrees};
use crate::paint::color::ColorDef;
use crate::render::surface::Surface;
use crate::runtime::effect::Effect;
use crate::runtime::event::{EventKind, InputEvent};

/// One card in the gallery. Identity is its index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryItem {
    /// Card title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Image reference.
    pub image: String,
    /// External link activated by clicking the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Tuning for [`RotatingGallery`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Degrees added to the rotation per update while idle.
    pub auto_step_deg: f64,
    /// Degrees of rotation per pixel of horizontal drag.
    pub drag_damping: f64,
    /// Ring radius in pixels on wide viewports.
    pub radius: f64,
    /// Ring radius below `narrow_breakpoint`.
    pub narrow_radius: f64,
    /// Viewport width below which the narrow settings apply.
    pub narrow_breakpoint: f64,
    /// Target updates per second on wide viewports.
    pub target_fps: f64,
    /// Target updates per second on narrow viewports.
    pub narrow_target_fps: f64,
    /// Angular width of the front window in which cards accept clicks.
    pub front_window_deg: f64,
    /// Opacity floor for cards at the back.
    pub min_opacity: f64,
    /// Perspective distance in pixels.
    pub perspective: f64,
    /// Card size in pixels at scale 1.
    pub card_size: [f64; 2],
    /// Card fill.
    pub card_color: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            auto_step_deg: 0.15,
            drag_damping: 0.25,
            radius: 420.0,
            narrow_radius: 240.0,
            narrow_breakpoint: 768.0,
            target_fps: 60.0,
            narrow_target_fps: 30.0,
            front_window_deg: 40.0,
            min_opacity: 0.2,
            perspective: 1200.0,
            card_size: [280.0, 360.0],
            card_color: "#111827".to_owned(),
        }
    }
}

impl GalleryConfig {
    /// Reject values that break the opacity or projection contracts.
    pub fn validate(&self) -> KonaResult<()> {
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(KonaError::config("min_opacity must be within [0, 1]"));
        }
        if !(self.radius > 0.0 && self.narrow_radius > 0.0) {
            return Err(KonaError::config("radii must be > 0"));
        }
        if !(self.perspective > self.radius.max(self.narrow_radius)) {
            return Err(KonaError::config("perspective must exceed the radius"));
        }
        if !(self.target_fps > 0.0 && self.narrow_target_fps > 0.0) {
            return Err(KonaError::config("target fps must be > 0"));
        }
        if !(self.auto_step_deg >= 0.0 && self.auto_step_deg.is_finite()) {
            return Err(KonaError::config("auto_step_deg must be finite and >= 0"));
        }
        Ok(())
    }

    /// Opacity of a card `distance` degrees from the front.
    ///
    /// 1 at the front, non-increasing up to 180°, never below `min_opacity`.
    pub fn opacity_for_distance(&self, distance_deg: f64) -> f64 {
        let d = distance_deg.clamp(0.0, 180.0).to_radians();
        let min = self.min_opacity.clamp(0.0, 1.0);
        min + (1.0 - min) * (1.0 + d.cos()) * 0.5
    }
}

/// Screen placement of one card for the current rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// Card angle in `[0, 360)`, 0 at the front.
    pub angle_deg: f64,
    /// Angular distance from the front in `[0, 180]`.
    pub distance_deg: f64,
    /// Horizontal offset from the ring center in pixels.
    pub offset: Vec2,
    /// Depth toward the viewer in pixels (positive is closer).
    pub depth: f64,
    /// Perspective scale.
    pub scale: f64,
    /// Opacity in `[min_opacity, 1]`.
    pub opacity: f64,
    /// Whether the card accepts pointer interaction.
    pub interactive: bool,
}

/// A ring of cards rotating around a vertical axis.
///
/// The only animated state is one rotation scalar; every card's transform is derived from it
/// and the card's fixed angular slot.
#[derive(Debug)]
pub struct RotatingGallery {
    cfg: GalleryConfig,
    items: Vec<GalleryItem>,
    rotation_deg: f64,
    dragging: bool,
    hovering: bool,
    last_drag_x: Option<f64>,
    narrow: bool,
    center: Point,
    card_color: ColorDef,
}

impl RotatingGallery {
    /// Gallery over `items` with default tuning.
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self::with_config(items, GalleryConfig::default())
    }

    /// Gallery over `items` with explicit tuning.
    pub fn with_config(items: Vec<GalleryItem>, cfg: GalleryConfig) -> Self {
        let center = Viewport::default().center();
        Self {
            cfg,
            items,
            rotation_deg: 0.0,
            dragging: false,
            hovering: false,
            last_drag_x: None,
            narrow: false,
            center,
            card_color: ColorDef::FALLBACK,
        }
    }

    /// Cards in slot order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Tuning in use.
    pub fn config(&self) -> &GalleryConfig {
        &self.cfg
    }

    /// Accumulated rotation in degrees (not wrapped).
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Whether automatic rotation is currently paused.
    pub fn is_paused(&self) -> bool {
        self.dragging || self.hovering
    }

    /// Whether the narrow-viewport settings are active.
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Ring radius for the current viewport class.
    pub fn effective_radius(&self) -> f64 {
        if self.narrow {
            self.cfg.narrow_radius
        } else {
            self.cfg.radius
        }
    }

    /// Target updates per second for the current viewport class.
    pub fn target_fps(&self) -> f64 {
        if self.narrow {
            self.cfg.narrow_target_fps
        } else {
            self.cfg.target_fps
        }
    }

    /// Re-evaluate the responsive policy and ring center.
    pub fn apply_viewport(&mut self, viewport: Viewport) {
        self.narrow = viewport.is_narrow(self.cfg.narrow_breakpoint);
        self.center = viewport.center();
    }

    /// Advance automatic rotation by one step unless paused.
    pub fn advance(&mut self) {
        if !self.is_paused() {
            self.rotation_deg += self.cfg.auto_step_deg;
        }
    }

    /// Begin a drag at horizontal position `x`.
    pub fn drag_start(&mut self, x: f64) {
        self.dragging = true;
        self.last_drag_x = Some(x);
    }

    /// Continue a drag; the horizontal delta feeds the rotation directly.
    pub fn drag_move(&mut self, x: f64) {
        if !self.dragging {
            return;
        }
        if let Some(prev) = self.last_drag_x.replace(x) {
            let dx = x - prev;
            if dx.is_finite() {
                self.rotation_deg += dx * self.cfg.drag_damping;
            }
        }
    }

    /// End a drag.
    pub fn drag_end(&mut self) {
        self.dragging = false;
        self.last_drag_x = None;
    }

    /// Set hover state.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Angle of card `index` in `[0, 360)`.
    pub fn item_angle(&self, index: usize) -> f64 {
        let n = self.items.len().max(1) as f64;
        wrap_degrees(index as f64 * 360.0 / n + self.rotation_deg)
    }

    /// Placement of card `index`, or `None` for an unknown index.
    pub fn item_transform(&self, index: usize) -> Option<ItemTransform> {
        if index >= self.items.len() {
            return None;
        }
        let angle_deg = self.item_angle(index);
        let distance_deg = angular_distance(angle_deg);
        let rad = angle_deg.to_radians();
        let r = self.effective_radius();
        let depth = r * rad.cos();
        let scale = self.cfg.perspective / (self.cfg.perspective - depth);
        Some(ItemTransform {
            angle_deg,
            distance_deg,
            offset: Vec2::new(r * rad.sin(), 0.0),
            depth,
            scale,
            opacity: self.cfg.opacity_for_distance(distance_deg),
            interactive: distance_deg <= self.cfg.front_window_deg * 0.5,
        })
    }

    /// Screen rectangle of card `index`.
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        let t = self.item_transform(index)?;
        let [w, h] = self.cfg.card_size;
        let c = self.center + t.offset;
        Some(Rect::from_center_size(c, (w * t.scale, h * t.scale)))
    }

    /// Front-most interactive card under `point`. Cards outside the front window never match.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        (0..self.items.len())
            .filter_map(|i| Some((i, self.item_transform(i)?, self.item_rect(i)?)))
            .filter(|(_, t, rect)| t.interactive && rect.contains(point))
            .max_by(|a, b| a.1.depth.total_cmp(&b.1.depth))
            .map(|(i, _, _)| i)
    }

    /// Link of the card a click at `point` would activate.
    pub fn activate(&self, point: Point) -> Option<&str> {
        let i = self.hit_test(point)?;
        self.items[i].link.as_deref()
    }
}

impl Effect for RotatingGallery {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn listens(&self) -> &'static [EventKind] {
        &[
            EventKind::PointerMove,
            EventKind::PointerButton,
            EventKind::Hover,
            EventKind::Resize,
        ]
    }

    fn mount(&mut self, viewport: Viewport) -> KonaResult<()> {
        self.cfg.validate()?;
        self.card_color = ColorDef::parse_or_default(&self.cfg.card_color);
        self.rotation_deg = 0.0;
        self.drag_end();
        self.hovering = false;
        self.apply_viewport(viewport);
        Ok(())
    }

    fn unmount(&mut self) {
        self.drag_end();
        self.hovering = false;
        self.rotation_deg = 0.0;
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.drag_start(pos.x),
            InputEvent::PointerMove { pos, .. } => self.drag_move(pos.x),
            InputEvent::PointerUp { .. } => self.drag_end(),
            InputEvent::PointerEnter => self.set_hovering(true),
            InputEvent::PointerLeave => {
                self.set_hovering(false);
                self.drag_end();
            }
            InputEvent::Resize(viewport) => self.apply_viewport(*viewport),
            InputEvent::Scroll { .. } => {}
        }
    }

    fn update(&mut self, _tick: &Tick) {
        self.advance();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(Rgba8Premul::transparent());
        let mut order: Vec<(usize, ItemTransform)> = (0..self.items.len())
            .filter_map(|i| Some((i, self.item_transform(i)?)))
            .collect();
        // Back to front.
        order.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));
        for (i, t) in order {
            let Some(rect) = self.item_rect(i) else {
                continue;
            };
            let color = self.card_color.with_opacity(t.opacity).to_rgba8_premul();
            surface.fill_rect(rect, Affine::IDENTITY, color);
        }
    }

    fn frame_interval(&self) -> Option<f64> {
        Some(1.0 / self.target_fps())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gallery.rs"]
mod tests;
