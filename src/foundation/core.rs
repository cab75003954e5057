pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Width below which layouts switch to their compact variant.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Host viewport as seen at mount or resize time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Whether the primary pointer is coarse (touch).
    #[serde(default)]
    pub coarse_pointer: bool,
}

impl Viewport {
    /// Fine-pointer viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            coarse_pointer: false,
        }
    }

    /// Mark the primary pointer as coarse.
    pub fn with_coarse_pointer(mut self, coarse: bool) -> Self {
        self.coarse_pointer = coarse;
        self
    }

    /// `true` when narrower than `breakpoint`.
    pub fn is_narrow(self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }

    /// Touch devices and narrow screens get the compact variant of responsive effects.
    pub fn prefers_compact(self) -> bool {
        self.coarse_pointer || self.is_narrow(COMPACT_BREAKPOINT_PX)
    }

    /// Viewport center in viewport coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Area in square pixels; negative sizes count as empty.
    pub fn area(self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Undo premultiplication, for APIs that take straight-alpha colors.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let un = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(self.a) / 2) / u32::from(self.a);
            v.min(255) as u8
        };
        [un(self.r), un(self.g), un(self.b), self.a]
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One execution of an effect's update+draw step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Number of ticks the effect has run since mount, starting at 0.
    pub frame: u64,
    /// Host clock in seconds.
    pub now_secs: f64,
    /// Seconds since the previous tick (0 for the first one).
    pub dt_secs: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
