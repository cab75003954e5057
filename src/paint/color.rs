use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{KonaError, KonaResult};
use crate::foundation::math::unit_to_u8;
use serde::{Deserialize, Serialize};

/// Straight-alpha color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl ColorDef {
    /// Opaque white, used when a color string cannot be parsed.
    pub const FALLBACK: ColorDef = ColorDef {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Build from straight-alpha channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`, `hsla()` or a
    /// small set of named colors.
    pub fn parse(s: &str) -> KonaResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KonaError::validation("empty color string"));
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some((name, args)) = split_function(&lower) {
            return match name {
                "rgb" | "rgba" => parse_rgb_args(args),
                "hsl" | "hsla" => parse_hsl_args(args),
                _ => Err(KonaError::validation(format!(
                    "unsupported color function \"{name}\""
                ))),
            };
        }

        match lower.as_str() {
            "white" => Ok(Self::rgba(1.0, 1.0, 1.0, 1.0)),
            "black" => Ok(Self::rgba(0.0, 0.0, 0.0, 1.0)),
            "transparent" => Ok(Self::rgba(0.0, 0.0, 0.0, 0.0)),
            _ => Err(KonaError::validation(format!("unrecognized color \"{s}\""))),
        }
    }

    /// Like [`ColorDef::parse`] but never fails: malformed input becomes [`ColorDef::FALLBACK`].
    pub fn parse_or_default(s: &str) -> Self {
        match Self::parse(s) {
            Ok(c) => c,
            Err(err) => {
                tracing::debug!(color = s, %err, "falling back to default color");
                Self::FALLBACK
            }
        }
    }

    /// Multiply alpha by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: self.a.clamp(0.0, 1.0) * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        let a = self.a.clamp(0.0, 1.0);
        Rgba8Premul {
            r: unit_to_u8(self.r.clamp(0.0, 1.0) * a),
            g: unit_to_u8(self.g.clamp(0.0, 1.0) * a),
            b: unit_to_u8(self.b.clamp(0.0, 1.0) * a),
            a: unit_to_u8(a),
        }
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => ColorDef::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let inner = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim(), inner))
}

fn parse_hex(s: &str) -> KonaResult<ColorDef> {
    fn nibble(c: u8) -> KonaResult<u8> {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| KonaError::validation(format!("invalid hex digit '{}'", c as char)))
    }

    let bytes = s.as_bytes();
    let mut channels = [255u8; 4];
    match bytes.len() {
        3 | 4 => {
            for (i, &c) in bytes.iter().enumerate() {
                let n = nibble(c)?;
                channels[i] = n * 17;
            }
        }
        6 | 8 => {
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                channels[i] = nibble(pair[0])? * 16 + nibble(pair[1])?;
            }
        }
        _ => {
            return Err(KonaError::validation(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA",
            ));
        }
    }

    let [r, g, b, a] = channels.map(|c| f64::from(c) / 255.0);
    Ok(ColorDef::rgba(r, g, b, a))
}

fn split_args(args: &str) -> Vec<&str> {
    // Accept both `rgb(1, 2, 3)` and `rgb(1 2 3 / 0.5)`.
    args.split([',', '/', ' '])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_number(s: &str) -> KonaResult<f64> {
    let v: f64 = s
        .parse()
        .map_err(|_| KonaError::validation(format!("invalid number \"{s}\"")))?;
    if !v.is_finite() {
        return Err(KonaError::validation(format!("non-finite number \"{s}\"")));
    }
    Ok(v)
}

/// `0.5` or `50%` to a unit value.
fn parse_unit(s: &str) -> KonaResult<f64> {
    match s.strip_suffix('%') {
        Some(p) => Ok(parse_number(p)? / 100.0),
        None => parse_number(s),
    }
}

fn parse_alpha(parts: &[&str]) -> KonaResult<f64> {
    match parts {
        [] => Ok(1.0),
        [a] => Ok(parse_unit(a)?.clamp(0.0, 1.0)),
        _ => Err(KonaError::validation("too many color components")),
    }
}

fn parse_rgb_args(args: &str) -> KonaResult<ColorDef> {
    let parts = split_args(args);
    if parts.len() < 3 {
        return Err(KonaError::validation("rgb() needs three channels"));
    }
    let channel = |s: &str| -> KonaResult<f64> {
        match s.strip_suffix('%') {
            Some(p) => Ok(parse_number(p)? / 100.0),
            None => Ok(parse_number(s)? / 255.0),
        }
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = parse_alpha(&parts[3..])?;
    Ok(ColorDef::rgba(
        r.clamp(0.0, 1.0),
        g.clamp(0.0, 1.0),
        b.clamp(0.0, 1.0),
        a,
    ))
}

fn parse_hsl_args(args: &str) -> KonaResult<ColorDef> {
    let parts = split_args(args);
    if parts.len() < 3 {
        return Err(KonaError::validation("hsl() needs three components"));
    }
    let h = parse_number(parts[0].trim_end_matches("deg"))?;
    let s = parse_unit(parts[1])?;
    let l = parse_unit(parts[2])?;
    let a = parse_alpha(&parts[3..])?;
    Ok(hsla_to_rgba(h, s, l, a))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> ColorDef {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return ColorDef::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    ColorDef::rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
