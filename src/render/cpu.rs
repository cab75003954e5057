use crate::foundation::core::{Affine, BezPath, Rgba8Premul, Viewport};
use crate::foundation::error::{KonaError, KonaResult};
use crate::render::composite::{fade_in_place, fill, over_in_place};
use crate::render::surface::{DrawOp, FrameRGBA, Surface};
use kurbo::Shape;

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Raster [`Surface`] backed by a persistent `vello_cpu` pixmap.
///
/// The pixmap is an accumulation buffer: nothing is cleared between frames unless an effect
/// asks for it, so `fade` leaves decaying trails of earlier content.
pub struct CpuSurface {
    width: u16,
    height: u16,
    accum: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    pending: Vec<DrawOp>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl CpuSurface {
    /// Allocate a transparent surface. Fails for empty sizes or sizes beyond `u16`.
    pub fn new(width: u32, height: u32) -> KonaResult<Self> {
        if width == 0 || height == 0 {
            return Err(KonaError::surface("surface must have a non-zero size"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| KonaError::surface("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| KonaError::surface("surface height exceeds u16"))?;
        Ok(Self {
            width: w,
            height: h,
            accum: vello_cpu::Pixmap::new(w, h),
            scratch: vello_cpu::Pixmap::new(w, h),
            pending: Vec::new(),
        })
    }

    /// Surface covering `viewport`, rounding fractional sizes up.
    pub fn for_viewport(viewport: Viewport) -> KonaResult<Self> {
        if !(viewport.width.is_finite() && viewport.height.is_finite()) {
            return Err(KonaError::surface("viewport size must be finite"));
        }
        let w = viewport.width.max(0.0).ceil() as u32;
        let h = viewport.height.max(0.0).ceil() as u32;
        Self::new(w, h)
    }

    /// Copy of the accumulated pixels (premultiplied).
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.accum.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn rasterize(&mut self, shapes: &[DrawOp]) -> KonaResult<()> {
        if shapes.is_empty() {
            return Ok(());
        }

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for op in shapes {
            match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    ctx.set_paint(paint_color(*color));
                    let path = kurbo::Circle::new(*center, *radius).to_path(CIRCLE_TOLERANCE);
                    ctx.fill_path(&bezpath_to_cpu(&path));
                }
                DrawOp::Rect {
                    rect,
                    transform,
                    color,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(paint_color(*color));
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                        rect.x0, rect.y0, rect.x1, rect.y1,
                    ));
                }
                DrawOp::Clear { .. } | DrawOp::Fade { .. } => {
                    return Err(KonaError::surface(
                        "compositing op reached the shape rasterizer",
                    ));
                }
            }
        }
        ctx.flush();

        fill(self.scratch.data_as_u8_slice_mut(), [0, 0, 0, 0]);
        ctx.render_to_pixmap(&mut self.scratch);
        over_in_place(
            self.accum.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
            1.0,
        )
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    fn push(&mut self, op: DrawOp) {
        self.pending.push(op);
    }

    fn present(&mut self) -> KonaResult<()> {
        let ops = std::mem::take(&mut self.pending);
        let mut batch_start = 0;
        for (i, op) in ops.iter().enumerate() {
            if !op.is_compositing() {
                continue;
            }
            self.rasterize(&ops[batch_start..i])?;
            batch_start = i + 1;
            match op {
                DrawOp::Clear { color } => {
                    fill(self.accum.data_as_u8_slice_mut(), color.to_array());
                }
                DrawOp::Fade { keep } => {
                    fade_in_place(self.accum.data_as_u8_slice_mut(), *keep);
                }
                DrawOp::Circle { .. } | DrawOp::Rect { .. } => {}
            }
        }
        self.rasterize(&ops[batch_start..])
    }
}

fn paint_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_straight_rgba();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
