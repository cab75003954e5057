/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

/// Shortest angular distance from `deg` to 0°, in `[0, 180]`.
pub fn angular_distance(deg: f64) -> f64 {
    let w = wrap_degrees(deg);
    if w > 180.0 { 360.0 - w } else { w }
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
