use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8Premul, Vec2},
    foundation::error::{KonaError, KonaResult},
};

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (t = 0) and `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8Premul {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Maps a progress scalar through `domain -> range` with clamping and easing.
///
/// Outside the domain the curve holds its endpoint values, so `sample(domain[0])` (and
/// anything before it) is exactly `range[0]` and `sample(domain[1])` is exactly `range[1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve {
    /// Input interval `[start, end]`.
    pub domain: [f64; 2],
    /// Output interval `[start, end]`; may be decreasing.
    pub range: [f64; 2],
    /// Easing applied to the normalized input.
    #[serde(default)]
    pub ease: Ease,
}

impl Curve {
    /// Curve with linear easing.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            ease: Ease::Linear,
        }
    }

    /// Replace the easing function.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Reject non-finite bounds and reversed domains.
    pub fn validate(&self) -> KonaResult<()> {
        if !self.domain.iter().chain(self.range.iter()).all(|v| v.is_finite()) {
            return Err(KonaError::validation("curve bounds must be finite"));
        }
        if self.domain[0] > self.domain[1] {
            return Err(KonaError::validation("curve domain start must be <= end"));
        }
        Ok(())
    }

    /// Normalized, clamped, eased position of `progress` within the domain.
    pub fn eased_t(&self, progress: f64) -> f64 {
        let [d0, d1] = self.domain;
        let span = d1 - d0;
        let t = if span <= 0.0 {
            // Degenerate domain: step at d0.
            if progress < d0 { 0.0 } else { 1.0 }
        } else if progress.is_nan() {
            0.0
        } else {
            ((progress - d0) / span).clamp(0.0, 1.0)
        };
        self.ease.apply(t)
    }

    /// Output value for `progress`.
    pub fn sample(&self, progress: f64) -> f64 {
        let [r0, r1] = self.range;
        let t = self.eased_t(progress);
        if t <= 0.0 {
            return r0;
        }
        if t >= 1.0 {
            return r1;
        }
        f64::lerp(&r0, &r1, t)
    }

    /// Interpolate any [`Lerp`] value pair with this curve's timing.
    pub fn sample_between<T: Lerp>(&self, progress: f64, a: &T, b: &T) -> T {
        T::lerp(a, b, self.eased_t(progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
