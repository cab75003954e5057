use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul};
use crate::foundation::error::KonaResult;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha in place (no-op when already straight).
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let c = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            px.copy_from_slice(&c.to_straight_rgba());
        }
        self.premultiplied = false;
    }
}

/// One drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Replace every pixel with `color`.
    Clear {
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Multiply every premultiplied channel by `keep`, so earlier content decays.
    Fade {
        /// Fraction retained, in `[0, 1]`.
        keep: f32,
    },
    /// Filled circle composited source-over.
    Circle {
        /// Center in surface pixels.
        center: Point,
        /// Radius in surface pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Filled rectangle under `transform`, composited source-over.
    Rect {
        /// Rectangle in local space.
        rect: Rect,
        /// Local-to-surface transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8Premul,
    },
}

impl DrawOp {
    /// Whether the op touches the whole surface rather than a shape.
    pub fn is_compositing(&self) -> bool {
        matches!(self, Self::Clear { .. } | Self::Fade { .. })
    }
}

/// Drawing surface capability handed to effects.
///
/// Draw calls may be batched; [`Surface::present`] makes them visible.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Record or execute one op.
    fn push(&mut self, op: DrawOp);

    /// Flush pending ops.
    fn present(&mut self) -> KonaResult<()>;

    /// Replace every pixel with `color`.
    fn clear(&mut self, color: Rgba8Premul) {
        self.push(DrawOp::Clear { color });
    }

    /// Accumulation mode: keep `keep` of whatever is already there.
    fn fade(&mut self, keep: f32) {
        self.push(DrawOp::Fade {
            keep: keep.clamp(0.0, 1.0),
        });
    }

    /// Fill a circle; zero, negative or non-finite radii draw nothing.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul) {
        if radius.is_finite() && radius > 0.0 && color.a > 0 {
            self.push(DrawOp::Circle {
                center,
                radius,
                color,
            });
        }
    }

    /// Fill a transformed rectangle.
    fn fill_rect(&mut self, rect: Rect, transform: Affine, color: Rgba8Premul) {
        if rect.area() > 0.0 && color.a > 0 {
            self.push(DrawOp::Rect {
                rect,
                transform,
                color,
            });
        }
    }
}

/// A [`Surface`] that records ops instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    presented: usize,
}

impl DisplayList {
    /// Empty list for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            presented: 0,
        }
    }

    /// Recorded ops, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Ops recorded since the last [`DisplayList::take`].
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of completed `present()` calls.
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Circles in the recorded ops.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    fn present(&mut self) -> KonaResult<()> {
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
