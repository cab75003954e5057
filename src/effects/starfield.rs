use rand::Rng;

use crate::effects::seeded_rng;
use crate::foundation::core::{Point, Tick, Viewport};
use crate::foundation::error::{KonaError, KonaResult};
use crate::paint::color::ColorDef;
use crate::render::surface::Surface;
use crate::runtime::effect::Effect;
use crate::runtime::event::{EventKind, InputEvent};

/// Tuning for [`StarfieldEffect`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Stars per 10 000 square pixels.
    pub density: f64,
    /// Hard cap on star count.
    pub max_stars: usize,
    /// Star radius range in pixels.
    pub size: [f64; 2],
    /// Base opacity range.
    pub opacity: [f64; 2],
    /// Twinkle angular speed range, radians per second.
    pub twinkle_speed: [f64; 2],
    /// Number of nebula clouds.
    pub nebula_count: usize,
    /// Nebula radius as a fraction of the shorter viewport side.
    pub nebula_radius: [f64; 2],
    /// Nebula opacity.
    pub nebula_opacity: f64,
    /// Background fill.
    pub background: String,
    /// Star color.
    pub star_color: String,
    /// Nebula palette.
    pub nebula_palette: Vec<String>,
    /// RNG seed.
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density: 1.6,
            max_stars: 600,
            size: [0.4, 1.6],
            opacity: [0.3, 1.0],
            twinkle_speed: [0.5, 2.5],
            nebula_count: 3,
            nebula_radius: [0.25, 0.5],
            nebula_opacity: 0.12,
            background: "#05060f".to_owned(),
            star_color: "#f8fafc".to_owned(),
            nebula_palette: vec![
                "#6d28d9".to_owned(),
                "#0ea5e9".to_owned(),
                "#db2777".to_owned(),
            ],
            seed: 0x57a2_f1e1d,
        }
    }
}

impl StarfieldConfig {
    /// Reject inverted or out-of-range bounds.
    pub fn validate(&self) -> KonaResult<()> {
        fn range(name: &str, [lo, hi]: [f64; 2], min: f64) -> KonaResult<()> {
            if lo.is_finite() && hi.is_finite() && min <= lo && lo <= hi {
                Ok(())
            } else {
                Err(KonaError::config(format!(
                    "{name} range must satisfy {min} <= min <= max"
                )))
            }
        }
        if !(self.density.is_finite() && self.density >= 0.0) {
            return Err(KonaError::config("density must be finite and >= 0"));
        }
        range("size", self.size, 0.0)?;
        range("opacity", self.opacity, 0.0)?;
        range("twinkle_speed", self.twinkle_speed, 0.0)?;
        range("nebula_radius", self.nebula_radius, 0.0)?;
        if self.opacity[1] > 1.0 {
            return Err(KonaError::config("opacity must not exceed 1"));
        }
        Ok(())
    }

    /// Star count for a viewport.
    pub fn star_count(&self, viewport: Viewport) -> usize {
        let n = (viewport.area() / 10_000.0 * self.density).floor();
        if n.is_finite() && n > 0.0 {
            (n as usize).min(self.max_stars)
        } else {
            0
        }
    }
}

/// One background star. Only its opacity changes after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Position in viewport pixels.
    pub pos: Point,
    /// Radius in pixels.
    pub size: f64,
    /// Opacity at the middle of the twinkle cycle.
    pub base_opacity: f64,
    /// Twinkle phase offset, radians.
    pub phase: f64,
    /// Twinkle angular speed, radians per second.
    pub speed: f64,
}

impl Star {
    /// Opacity at time `t` seconds, in `[0, 1]`.
    pub fn opacity_at(&self, t: f64) -> f64 {
        let wave = 0.5 + 0.5 * (self.phase + t * self.speed).sin();
        (self.base_opacity * wave).clamp(0.0, 1.0)
    }
}

/// Large soft glow behind the stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NebulaCloud {
    /// Center in viewport pixels.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Straight-alpha color.
    pub color: ColorDef,
}

/// Twinkling starfield over a few nebula clouds.
///
/// Stars are generated at mount and regenerated on resize; steady-state ticks only advance
/// the clock that drives twinkling.
#[derive(Debug)]
pub struct StarfieldEffect {
    cfg: StarfieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    clouds: Vec<NebulaCloud>,
    background: ColorDef,
    star_color: ColorDef,
    time_secs: f64,
}

impl Default for StarfieldEffect {
    fn default() -> Self {
        Self::new(StarfieldConfig::default())
    }
}

impl StarfieldEffect {
    /// Effect with the given tuning.
    pub fn new(cfg: StarfieldConfig) -> Self {
        Self {
            cfg,
            viewport: Viewport::default(),
            stars: Vec::new(),
            clouds: Vec::new(),
            background: ColorDef::FALLBACK,
            star_color: ColorDef::FALLBACK,
            time_secs: 0.0,
        }
    }

    /// Current stars.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Current nebula clouds.
    pub fn clouds(&self) -> &[NebulaCloud] {
        &self.clouds
    }

    /// Twinkle clock in seconds.
    pub fn time_secs(&self) -> f64 {
        self.time_secs
    }

    /// Regenerate stars and clouds for `viewport`.
    ///
    /// A viewport with a non-finite side is ignored and the previous field kept.
    pub fn populate(&mut self, viewport: Viewport) {
        if !(viewport.width.is_finite() && viewport.height.is_finite()) {
            tracing::debug!(?viewport, "non-finite viewport; starfield unchanged");
            return;
        }
        self.viewport = viewport;
        let mut rng = seeded_rng(self.cfg.seed);
        let w = viewport.width.max(0.0);
        let h = viewport.height.max(0.0);

        let count = self.cfg.star_count(viewport);
        let [s0, s1] = self.cfg.size;
        let [o0, o1] = self.cfg.opacity;
        let [v0, v1] = self.cfg.twinkle_speed;
        self.stars = (0..count)
            .map(|_| Star {
                pos: Point::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=h)),
                size: rng.gen_range(s0..=s1),
                base_opacity: rng.gen_range(o0..=o1),
                phase: rng.gen_range(0.0..std::f64::consts::TAU),
                speed: rng.gen_range(v0..=v1),
            })
            .collect();

        let palette: Vec<ColorDef> = self
            .cfg
            .nebula_palette
            .iter()
            .map(|c| ColorDef::parse_or_default(c))
            .collect();
        let short_side = w.min(h);
        let [n0, n1] = self.cfg.nebula_radius;
        self.clouds = if palette.is_empty() || short_side <= 0.0 {
            Vec::new()
        } else {
            (0..self.cfg.nebula_count)
                .map(|i| NebulaCloud {
                    center: Point::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=h)),
                    radius: short_side * rng.gen_range(n0..=n1),
                    color: palette[i % palette.len()],
                })
                .collect()
        };
    }
}

impl Effect for StarfieldEffect {
    fn name(&self) -> &'static str {
        "starfield"
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn mount(&mut self, viewport: Viewport) -> KonaResult<()> {
        self.cfg.validate()?;
        self.background = ColorDef::parse_or_default(&self.cfg.background);
        self.star_color = ColorDef::parse_or_default(&self.cfg.star_color);
        self.time_secs = 0.0;
        self.populate(viewport);
        Ok(())
    }

    fn unmount(&mut self) {
        self.stars = Vec::new();
        self.clouds = Vec::new();
        self.time_secs = 0.0;
    }

    fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::Resize(viewport) = event {
            self.populate(*viewport);
        }
    }

    fn update(&mut self, tick: &Tick) {
        self.time_secs += tick.dt_secs;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.background.to_rgba8_premul());
        for cloud in &self.clouds {
            // Three concentric layers approximate a radial falloff.
            for (scale, weight) in [(1.0, 0.35), (0.66, 0.65), (0.33, 1.0)] {
                let color = cloud
                    .color
                    .with_opacity(self.cfg.nebula_opacity * weight)
                    .to_rgba8_premul();
                surface.fill_circle(cloud.center, cloud.radius * scale, color);
            }
        }
        for star in &self.stars {
            let color = self
                .star_color
                .with_opacity(star.opacity_at(self.time_secs))
                .to_rgba8_premul();
            surface.fill_circle(star.pos, star.size, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/starfield.rs"]
mod tests;
