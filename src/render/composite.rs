use crate::foundation::error::{KonaError, KonaResult};
use crate::foundation::math::{add_sat_u8, mul_div255};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of `src` (scaled by `opacity`) onto `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Composite a whole buffer source-over.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> KonaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(KonaError::surface(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale every channel by `keep`. Premultiplied data stays valid because color and alpha
/// shrink together.
///
/// Truncates instead of rounding so repeated fades always reach zero.
pub fn fade_in_place(buf: &mut [u8], keep: f32) {
    let k = ((keep.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u32;
    if k == 255 {
        return;
    }
    for c in buf.iter_mut() {
        *c = ((u32::from(*c) * k) / 255) as u8;
    }
}

/// Fill a buffer with one pixel value.
pub fn fill(buf: &mut [u8], rgba: PremulRgba8) {
    for px in buf.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
