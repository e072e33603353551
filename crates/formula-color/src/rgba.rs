use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A concrete, displayable color.
///
/// Channels are fractions in `0.0..=1.0`. Keeping full precision between
/// transform steps matters for chains such as gamma followed by inverse gamma.
///
/// Serialized as a `#AARRGGBB` hex string for IPC friendliness.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A color decomposed into hue, saturation and lightness, all in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            channel_from_u8(r),
            channel_from_u8(g),
            channel_from_u8(b),
            channel_from_u8(a),
        )
    }

    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Quantize to `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        (u32::from(channel_to_u8(self.a)) << 24)
            | (u32::from(channel_to_u8(self.r)) << 16)
            | (u32::from(channel_to_u8(self.g)) << 8)
            | u32::from(channel_to_u8(self.b))
    }

    pub fn to_hsla(self) -> Hsla {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        Hsla { h, s, l, a: self.a }
    }

    pub fn from_hsla(hsla: Hsla) -> Self {
        let (r, g, b) = hsl_to_rgb(hsla.h, hsla.s, hsla.l);
        Self::new(clamp_unit(r), clamp_unit(g), clamp_unit(b), hsla.a)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            clamp_unit(f(self.r)),
            clamp_unit(f(self.g)),
            clamp_unit(f(self.b)),
            self.a,
        )
    }

    fn to_hex(self) -> String {
        format!("#{:08X}", self.to_argb())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) if hex.len() == 8 => u32::from_str_radix(hex, 16)
                .map(Rgba::from_argb)
                .map_err(|_| D::Error::custom(format!("invalid hex digits in {s:?}"))),
            _ => Err(D::Error::custom(format!("expected `#AARRGGBB`, got {s:?}"))),
        }
    }
}

fn channel_from_u8(v: u8) -> f64 {
    f64::from(v) / 255.0
}

fn channel_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Wrap a hue-like value into `0.0..1.0`.
pub(crate) fn wrap_unit(v: f64) -> f64 {
    let wrapped = v.rem_euclid(1.0);
    if wrapped.is_finite() {
        wrapped
    } else {
        0.0
    }
}

pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s.abs() < f64::EPSILON {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
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

/// sRGB transfer function: linear light to gamma-encoded.
pub fn srgb_gamma(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Inverse of [`srgb_gamma`]: gamma-encoded to linear light.
pub fn srgb_inverse_gamma(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
