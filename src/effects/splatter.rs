use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::effects::seeded_rng;
use crate::foundation::core::{Point, Tick, Vec2, Viewport};
use crate::foundation::error::{KonaError, KonaResult};
use crate::paint::color::ColorDef;
use crate::render::surface::Surface;
use crate::runtime::effect::Effect;
use crate::runtime::event::{EventKind, InputEvent};

/// Tuning for [`SplatterEffect`]. Values are visual choices, not invariants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SplatterConfig {
    /// Pointer displacement (px per move event) at or below which nothing spawns.
    pub speed_threshold: f64,
    /// Extra splats per pixel of displacement above the threshold.
    pub spawn_per_speed: f64,
    /// Cap on splats spawned by one move event.
    pub max_spawn: u32,
    /// Fraction of pointer displacement inherited as velocity.
    pub velocity_scale: f64,
    /// Random velocity jitter, px per tick.
    pub jitter: f64,
    /// Multiplicative velocity decay per tick.
    pub velocity_decay: f64,
    /// Additive life decay per tick.
    pub life_decay: f64,
    /// Multiplicative radius growth per tick.
    pub radius_growth: f64,
    /// Initial radius range `[min, max]`.
    pub radius: [f64; 2],
    /// Initial life range `[min, max]`, within `(0, 1]`.
    pub life: [f64; 2],
    /// Fraction of the previous frame kept each tick.
    pub fade_keep: f32,
    /// Peak splat opacity.
    pub opacity: f64,
    /// CSS colors; malformed entries become opaque white.
    pub palette: Vec<String>,
    /// Upper bound on live splats.
    pub max_splats: usize,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SplatterConfig {
    fn default() -> Self {
        Self {
            speed_threshold: 2.0,
            spawn_per_speed: 0.15,
            max_spawn: 4,
            velocity_scale: 0.2,
            jitter: 0.6,
            velocity_decay: 0.92,
            life_decay: 0.025,
            radius_growth: 1.015,
            radius: [6.0, 14.0],
            life: [0.7, 1.0],
            fade_keep: 0.86,
            opacity: 0.55,
            palette: vec![
                "#7c3aed".to_owned(),
                "#38bdf8".to_owned(),
                "hsl(322, 81%, 62%)".to_owned(),
                "rgba(250, 204, 21, 0.9)".to_owned(),
            ],
            max_splats: 512,
            seed: 0x5eed_5a1a,
        }
    }
}

impl SplatterConfig {
    /// Reject values that would break the decay/cull contract.
    pub fn validate(&self) -> KonaResult<()> {
        if !(self.speed_threshold.is_finite() && self.speed_threshold >= 0.0) {
            return Err(KonaError::config("speed_threshold must be finite and >= 0"));
        }
        if !(self.life_decay.is_finite() && self.life_decay > 0.0) {
            return Err(KonaError::config("life_decay must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.velocity_decay) {
            return Err(KonaError::config("velocity_decay must be within [0, 1]"));
        }
        if !(self.radius_growth.is_finite() && self.radius_growth >= 1.0) {
            return Err(KonaError::config("radius_growth must be >= 1"));
        }
        let [r0, r1] = self.radius;
        if !(r0 > 0.0 && r0 <= r1 && r1.is_finite()) {
            return Err(KonaError::config("radius range must satisfy 0 < min <= max"));
        }
        let [l0, l1] = self.life;
        if !(l0 > 0.0 && l0 <= l1 && l1 <= 1.0) {
            return Err(KonaError::config("life range must satisfy 0 < min <= max <= 1"));
        }
        if self.max_splats == 0 {
            return Err(KonaError::config("max_splats must be > 0"));
        }
        Ok(())
    }

    /// Number of splats one move event of displacement `speed` spawns.
    ///
    /// Zero at or below the threshold, then non-decreasing and capped at `max_spawn`.
    pub fn spawn_count(&self, speed: f64) -> u32 {
        if speed.is_nan() || speed <= self.speed_threshold {
            return 0;
        }
        let extra = ((speed - self.speed_threshold) * self.spawn_per_speed.max(0.0)).floor();
        let n = 1.0 + extra.min(f64::from(u32::MAX));
        (n as u32).min(self.max_spawn)
    }
}

/// One splatter particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    /// Position in viewport pixels.
    pub pos: Point,
    /// Velocity in px per tick.
    pub vel: Vec2,
    /// Radius in pixels.
    pub radius: f64,
    /// Remaining life; removed once `<= 0`.
    pub life: f64,
    /// Life at spawn, used to scale opacity.
    pub max_life: f64,
    /// Straight-alpha color.
    pub color: ColorDef,
}

impl Splat {
    /// Advance one tick.
    pub fn step(&mut self, cfg: &SplatterConfig) {
        self.pos += self.vel;
        self.vel *= cfg.velocity_decay;
        self.life -= cfg.life_decay;
        self.radius *= cfg.radius_growth;
    }

    /// Whether the splat should be culled.
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Remaining life fraction in `[0, 1]`.
    pub fn life_fraction(&self) -> f64 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Pointer-trail splatter: fast pointer movement spawns colored blobs that drift, grow and
/// fade on an accumulation surface.
#[derive(Debug)]
pub struct SplatterEffect {
    cfg: SplatterConfig,
    palette: Vec<ColorDef>,
    splats: Vec<Splat>,
    last_pointer: Option<Point>,
    rng: ChaCha8Rng,
}

impl Default for SplatterEffect {
    fn default() -> Self {
        Self::new(SplatterConfig::default())
    }
}

impl SplatterEffect {
    /// Effect with the given tuning.
    pub fn new(cfg: SplatterConfig) -> Self {
        let rng = seeded_rng(cfg.seed);
        Self {
            cfg,
            palette: Vec::new(),
            splats: Vec::new(),
            last_pointer: None,
            rng,
        }
    }

    /// Tuning in use.
    pub fn config(&self) -> &SplatterConfig {
        &self.cfg
    }

    /// Live splats.
    pub fn splats(&self) -> &[Splat] {
        &self.splats
    }

    /// Record a pointer sample; returns how many splats it spawned.
    pub fn on_pointer_move(&mut self, pos: Point) -> u32 {
        let Some(prev) = self.last_pointer.replace(pos) else {
            return 0;
        };
        let delta = pos - prev;
        let count = self.cfg.spawn_count(delta.hypot());
        for _ in 0..count {
            self.spawn(pos, delta);
        }
        count
    }

    /// Advance every splat and cull the dead ones.
    pub fn tick(&mut self) {
        let cfg = &self.cfg;
        for s in &mut self.splats {
            s.step(cfg);
        }
        self.splats.retain(|s| !s.is_dead());
    }

    fn spawn(&mut self, at: Point, delta: Vec2) {
        let max = self.cfg.max_splats;
        if max == 0 {
            return;
        }
        // Oldest first.
        let excess = (self.splats.len() + 1).saturating_sub(max);
        if excess > 0 {
            self.splats.drain(..excess);
        }
        let [r0, r1] = self.cfg.radius;
        let [l0, l1] = self.cfg.life;
        let jitter = self.cfg.jitter.abs();
        let jx = if jitter > 0.0 {
            self.rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        let jy = if jitter > 0.0 {
            self.rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        let life = self.rng.gen_range(l0..=l1);
        let color = if self.palette.is_empty() {
            ColorDef::FALLBACK
        } else {
            self.palette[self.rng.gen_range(0..self.palette.len())]
        };
        self.splats.push(Splat {
            pos: at,
            vel: delta * self.cfg.velocity_scale + Vec2::new(jx, jy),
            radius: self.rng.gen_range(r0..=r1),
            life,
            max_life: life,
            color,
        });
    }
}

impl Effect for SplatterEffect {
    fn name(&self) -> &'static str {
        "splatter"
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::PointerMove, EventKind::Hover]
    }

    fn mount(&mut self, _viewport: Viewport) -> KonaResult<()> {
        self.cfg.validate()?;
        self.palette = self
            .cfg
            .palette
            .iter()
            .map(|c| ColorDef::parse_or_default(c))
            .collect();
        self.splats.clear();
        self.last_pointer = None;
        self.rng = seeded_rng(self.cfg.seed);
        Ok(())
    }

    fn unmount(&mut self) {
        self.splats = Vec::new();
        self.palette.clear();
        self.last_pointer = None;
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMove { pos, .. } => {
                self.on_pointer_move(*pos);
            }
            // Re-entering must not count the jump from the exit point as movement.
            InputEvent::PointerLeave | InputEvent::PointerEnter => self.last_pointer = None,
            _ => {}
        }
    }

    fn update(&mut self, _tick: &Tick) {
        self.tick();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fade(self.cfg.fade_keep);
        for s in &self.splats {
            let color = s
                .color
                .with_opacity(self.cfg.opacity * s.life_fraction())
                .to_rgba8_premul();
            surface.fill_circle(s.pos, s.radius, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/splatter.rs"]
mod tests;
