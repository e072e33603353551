//! DrawingML color transforms (`a:tint`, `a:lumMod`, `a:gamma`, ...).
//!
//! A [`TransformSet`] holds at most one parameter per [`TransformKind`] and
//! always applies them in ascending kind order, so two sets with the same
//! members produce the same output regardless of how they were built.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::rgba::{clamp_unit, srgb_gamma, srgb_inverse_gamma, wrap_unit, Rgba};
use crate::units;

/// The 28 transform kinds, declared in application order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformKind {
    Tint,
    Shade,
    Complement,
    Inverse,
    Grayscale,
    Alpha,
    AlphaOffset,
    AlphaModulation,
    Hue,
    HueOffset,
    HueModulation,
    Saturation,
    SaturationOffset,
    SaturationModulation,
    Luminance,
    LuminanceOffset,
    LuminanceModulation,
    Red,
    RedOffset,
    RedModulation,
    Green,
    GreenOffset,
    GreenModulation,
    Blue,
    BlueOffset,
    BlueModulation,
    Gamma,
    InverseGamma,
}

/// How a transform's `val` attribute is expressed on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformUnit {
    /// Thousandths of a percent.
    Percentage,
    /// 60000ths of a degree.
    Angle,
    /// Empty element; presence means "on".
    Flag,
}

const TRANSFORM_TOKENS: [(TransformKind, &str, TransformUnit); 28] = [
    (TransformKind::Tint, "tint", TransformUnit::Percentage),
    (TransformKind::Shade, "shade", TransformUnit::Percentage),
    (TransformKind::Complement, "comp", TransformUnit::Flag),
    (TransformKind::Inverse, "inv", TransformUnit::Flag),
    (TransformKind::Grayscale, "gray", TransformUnit::Flag),
    (TransformKind::Alpha, "alpha", TransformUnit::Percentage),
    (TransformKind::AlphaOffset, "alphaOff", TransformUnit::Percentage),
    (TransformKind::AlphaModulation, "alphaMod", TransformUnit::Percentage),
    (TransformKind::Hue, "hue", TransformUnit::Angle),
    (TransformKind::HueOffset, "hueOff", TransformUnit::Angle),
    (TransformKind::HueModulation, "hueMod", TransformUnit::Percentage),
    (TransformKind::Saturation, "sat", TransformUnit::Percentage),
    (TransformKind::SaturationOffset, "satOff", TransformUnit::Percentage),
    (TransformKind::SaturationModulation, "satMod", TransformUnit::Percentage),
    (TransformKind::Luminance, "lum", TransformUnit::Percentage),
    (TransformKind::LuminanceOffset, "lumOff", TransformUnit::Percentage),
    (TransformKind::LuminanceModulation, "lumMod", TransformUnit::Percentage),
    (TransformKind::Red, "red", TransformUnit::Percentage),
    (TransformKind::RedOffset, "redOff", TransformUnit::Percentage),
    (TransformKind::RedModulation, "redMod", TransformUnit::Percentage),
    (TransformKind::Green, "green", TransformUnit::Percentage),
    (TransformKind::GreenOffset, "greenOff", TransformUnit::Percentage),
    (TransformKind::GreenModulation, "greenMod", TransformUnit::Percentage),
    (TransformKind::Blue, "blue", TransformUnit::Percentage),
    (TransformKind::BlueOffset, "blueOff", TransformUnit::Percentage),
    (TransformKind::BlueModulation, "blueMod", TransformUnit::Percentage),
    (TransformKind::Gamma, "gamma", TransformUnit::Flag),
    (TransformKind::InverseGamma, "invGamma", TransformUnit::Flag),
];

// Rec. 601 luma weights.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

impl TransformKind {
    pub fn all() -> impl Iterator<Item = TransformKind> {
        TRANSFORM_TOKENS.iter().map(|(kind, _, _)| *kind)
    }

    /// Element local name, e.g. `"lumMod"`.
    pub fn to_token(self) -> &'static str {
        TRANSFORM_TOKENS[self as usize].1
    }

    pub fn from_token(token: &str) -> Option<Self> {
        TRANSFORM_TOKENS
            .iter()
            .find(|(_, t, _)| *t == token)
            .map(|(kind, _, _)| *kind)
    }

    pub fn unit(self) -> TransformUnit {
        TRANSFORM_TOKENS[self as usize].2
    }

    pub fn is_flag(self) -> bool {
        self.unit() == TransformUnit::Flag
    }

    /// Quantize a human-unit value (percent, degrees, or non-zero for flags).
    pub(crate) fn to_raw(self, value: f64) -> i32 {
        match self.unit() {
            TransformUnit::Percentage => units::percent_to_raw(value),
            TransformUnit::Angle => units::degrees_to_raw(value),
            TransformUnit::Flag => i32::from(value != 0.0 && !value.is_nan()),
        }
    }

    pub(crate) fn from_raw(self, raw: i32) -> f64 {
        match self.unit() {
            TransformUnit::Percentage => units::raw_to_percent(raw),
            TransformUnit::Angle => units::raw_to_degrees(raw),
            TransformUnit::Flag => f64::from(raw),
        }
    }

    fn apply(self, color: Rgba, raw: i32) -> Rgba {
        // Fraction for percentage kinds (100% = 1.0) or of a full turn for angles.
        let p = match self.unit() {
            TransformUnit::Angle => units::raw_to_degrees(raw) / 360.0,
            _ => units::raw_to_percent(raw) / 100.0,
        };

        match self {
            TransformKind::Tint => with_hsl(color, |h, s, l| (h, s, clamp_unit(l * p + (1.0 - p)))),
            TransformKind::Shade => with_hsl(color, |h, s, l| (h, s, clamp_unit(l * p))),
            TransformKind::Complement => with_hsl(color, |h, s, l| (wrap_unit(h + 0.5), s, l)),
            TransformKind::Inverse => {
                with_hsl(color, |h, s, l| (wrap_unit(h + 0.5), s, wrap_unit(l + 0.5)))
            }
            TransformKind::Grayscale => {
                let luma = clamp_unit(LUMA_R * color.r + LUMA_G * color.g + LUMA_B * color.b);
                Rgba::new(luma, luma, luma, color.a)
            }
            TransformKind::Alpha => color.with_alpha(clamp_unit(p)),
            TransformKind::AlphaOffset => color.with_alpha(clamp_unit(color.a + p)),
            TransformKind::AlphaModulation => color.with_alpha(clamp_unit(color.a * p)),
            TransformKind::Hue => with_hsl(color, |_, s, l| (wrap_unit(p), s, l)),
            TransformKind::HueOffset => with_hsl(color, |h, s, l| (wrap_unit(h + p), s, l)),
            TransformKind::HueModulation => with_hsl(color, |h, s, l| (wrap_unit(h * p), s, l)),
            TransformKind::Saturation => with_hsl(color, |h, _, l| (h, clamp_unit(p), l)),
            TransformKind::SaturationOffset => {
                with_hsl(color, |h, s, l| (h, clamp_unit(s + p), l))
            }
            TransformKind::SaturationModulation => {
                with_hsl(color, |h, s, l| (h, clamp_unit(s * p), l))
            }
            TransformKind::Luminance => with_hsl(color, |h, s, _| (h, s, clamp_unit(p))),
            TransformKind::LuminanceOffset => {
                with_hsl(color, |h, s, l| (h, s, clamp_unit(l + p)))
            }
            TransformKind::LuminanceModulation => {
                with_hsl(color, |h, s, l| (h, s, clamp_unit(l * p)))
            }
            TransformKind::Red => Rgba { r: clamp_unit(p), ..color },
            TransformKind::RedOffset => Rgba { r: clamp_unit(color.r + p), ..color },
            TransformKind::RedModulation => Rgba { r: clamp_unit(color.r * p), ..color },
            TransformKind::Green => Rgba { g: clamp_unit(p), ..color },
            TransformKind::GreenOffset => Rgba { g: clamp_unit(color.g + p), ..color },
            TransformKind::GreenModulation => Rgba { g: clamp_unit(color.g * p), ..color },
            TransformKind::Blue => Rgba { b: clamp_unit(p), ..color },
            TransformKind::BlueOffset => Rgba { b: clamp_unit(color.b + p), ..color },
            TransformKind::BlueModulation => Rgba { b: clamp_unit(color.b * p), ..color },
            TransformKind::Gamma => color.map_rgb(srgb_gamma),
            TransformKind::InverseGamma => color.map_rgb(srgb_inverse_gamma),
        }
    }
}

fn with_hsl(color: Rgba, f: impl FnOnce(f64, f64, f64) -> (f64, f64, f64)) -> Rgba {
    let mut hsla = color.to_hsla();
    let (h, s, l) = f(hsla.h, hsla.s, hsla.l);
    hsla.h = h;
    hsla.s = s;
    hsla.l = l;
    Rgba::from_hsla(hsla)
}

/// At most one parameter per [`TransformKind`], applied in kind order.
///
/// Parameters are stored quantized in their wire unit so equality, hashing
/// and serialization all see the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransformSet {
    entries: BTreeMap<TransformKind, i32>,
}

impl TransformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the parameter for `kind`.
    ///
    /// `value` is in percent for percentage kinds and degrees for `Hue`/`HueOffset`.
    /// For flag kinds any non-zero value switches the transform on and zero
    /// removes it.
    pub fn insert(&mut self, kind: TransformKind, value: f64) {
        self.insert_raw(kind, kind.to_raw(value));
    }

    pub(crate) fn insert_raw(&mut self, kind: TransformKind, raw: i32) {
        if kind.is_flag() {
            if raw == 0 {
                self.entries.remove(&kind);
            } else {
                self.entries.insert(kind, 1);
            }
            return;
        }
        self.entries.insert(kind, raw);
    }

    pub fn remove(&mut self, kind: TransformKind) -> Option<f64> {
        self.entries.remove(&kind).map(|raw| kind.from_raw(raw))
    }

    pub fn contains(&self, kind: TransformKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn get(&self, kind: TransformKind) -> Option<f64> {
        self.entries.get(&kind).map(|raw| kind.from_raw(*raw))
    }

    pub(crate) fn get_raw(&self, kind: TransformKind) -> Option<i32> {
        self.entries.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in application order.
    pub fn iter(&self) -> impl Iterator<Item = (TransformKind, f64)> + '_ {
        self.entries
            .iter()
            .map(|(kind, raw)| (*kind, kind.from_raw(*raw)))
    }

    pub(crate) fn iter_raw(&self) -> impl Iterator<Item = (TransformKind, i32)> + '_ {
        self.entries.iter().map(|(kind, raw)| (*kind, *raw))
    }

    /// Apply every transform to `color`, each step reading the previous step's output.
    pub fn apply(&self, color: Rgba) -> Rgba {
        self.entries
            .iter()
            .fold(color, |acc, (kind, raw)| kind.apply(acc, *raw))
    }
}

// Entries go through `insert_raw` so flag kinds are normalized exactly as
// they are for sets built in code.
impl<'de> Deserialize<'de> for TransformSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<TransformKind, i32>::deserialize(deserializer)?;
        let mut set = TransformSet::new();
        for (kind, raw) in entries {
            set.insert_raw(kind, raw);
        }
        Ok(set)
    }
}

impl FromIterator<(TransformKind, f64)> for TransformSet {
    fn from_iter<I: IntoIterator<Item = (TransformKind, f64)>>(iter: I) -> Self {
        let mut set = TransformSet::new();
        for (kind, value) in iter {
            set.insert(kind, value);
        }
        set
    }
}
