use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::palette::ColorPalette;
use crate::preset::PresetColor;
use crate::rgba::{Hsla, Rgba};
use crate::scheme::SchemeColor;
use crate::system::SystemColor;
use crate::transform::{TransformKind, TransformSet};
use crate::units;

/// Which kind of base color a [`ColorValue`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Invalid,
    Auto,
    Indexed,
    Rgb,
    Hsl,
    System,
    Scheme,
    Preset,
}

/// Percentage RGB channels (`a:scrgbClr`), in thousandths of a percent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaledRgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// `a:hslClr` channels: hue in 60000ths of a degree, sat/lum in thousandths of a percent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: i32,
    pub sat: i32,
    pub lum: i32,
}

impl HslColor {
    pub fn hue_degrees(self) -> f64 {
        units::raw_to_degrees(self.hue)
    }

    pub fn saturation_percent(self) -> f64 {
        units::raw_to_percent(self.sat)
    }

    pub fn luminance_percent(self) -> f64 {
        units::raw_to_percent(self.lum)
    }

    pub fn to_rgba(self) -> Rgba {
        Rgba::from_hsla(Hsla {
            h: crate::rgba::wrap_unit(self.hue_degrees() / 360.0),
            s: crate::rgba::clamp_unit(self.saturation_percent() / 100.0),
            l: crate::rgba::clamp_unit(self.luminance_percent() / 100.0),
            a: 1.0,
        })
    }
}

impl ScaledRgb {
    pub fn to_rgba(self) -> Rgba {
        let channel = |raw: i32| crate::rgba::clamp_unit(units::raw_to_percent(raw) / 100.0);
        Rgba::new(channel(self.r), channel(self.g), channel(self.b), 1.0)
    }
}

/// The base color before any transform, with its kind-specific payload.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BaseColor {
    #[default]
    Invalid,
    Auto,
    Indexed {
        index: u32,
    },
    /// 8-bit RGB (`a:srgbClr`, SpreadsheetML `rgb`), stored as `0xAARRGGBB`.
    Rgb {
        argb: u32,
    },
    ScaledRgb(ScaledRgb),
    Hsl(HslColor),
    System {
        slot: SystemColor,
        /// `lastClr` snapshot as `0xAARRGGBB`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_color: Option<u32>,
    },
    Scheme {
        slot: SchemeColor,
    },
    Preset {
        preset: PresetColor,
    },
}

impl BaseColor {
    pub fn kind(&self) -> ColorKind {
        match self {
            BaseColor::Invalid => ColorKind::Invalid,
            BaseColor::Auto => ColorKind::Auto,
            BaseColor::Indexed { .. } => ColorKind::Indexed,
            BaseColor::Rgb { .. } | BaseColor::ScaledRgb(_) => ColorKind::Rgb,
            BaseColor::Hsl(_) => ColorKind::Hsl,
            BaseColor::System { .. } => ColorKind::System,
            BaseColor::Scheme { .. } => ColorKind::Scheme,
            BaseColor::Preset { .. } => ColorKind::Preset,
        }
    }

    /// Context-free resolution. Scheme, indexed and automatic colors need a palette.
    pub fn resolve(&self) -> Option<Rgba> {
        match self {
            BaseColor::Rgb { argb } => Some(Rgba::from_argb(*argb)),
            BaseColor::ScaledRgb(rgb) => Some(rgb.to_rgba()),
            BaseColor::Hsl(hsl) => Some(hsl.to_rgba()),
            BaseColor::Preset { preset } => Some(Rgba::from_argb(preset.argb())),
            BaseColor::System { last_color, .. } => last_color.map(Rgba::from_argb),
            BaseColor::Invalid
            | BaseColor::Auto
            | BaseColor::Indexed { .. }
            | BaseColor::Scheme { .. } => None,
        }
    }
}

/// A color as it appears in a document: a base color plus an ordered set of transforms.
///
/// Equality is structural (base payload and transforms). Hashing goes through
/// [`ColorValue::id_key`], the canonical DrawingML serialization, which is a
/// function of exactly the same fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ColorValue {
    base: BaseColor,
    #[serde(default, skip_serializing_if = "TransformSet::is_empty")]
    transforms: TransformSet,
    #[serde(skip)]
    key: OnceCell<Vec<u8>>,
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.transforms == other.transforms
    }
}

impl Eq for ColorValue {}

impl Hash for ColorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id_key().hash(state);
    }
}

impl From<BaseColor> for ColorValue {
    fn from(base: BaseColor) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl ColorValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    pub fn from_argb(argb: u32) -> Self {
        BaseColor::Rgb { argb }.into()
    }

    pub fn from_scheme(slot: SchemeColor) -> Self {
        BaseColor::Scheme { slot }.into()
    }

    pub fn from_indexed(index: u32) -> Self {
        BaseColor::Indexed { index }.into()
    }

    pub fn auto() -> Self {
        BaseColor::Auto.into()
    }

    pub fn base(&self) -> &BaseColor {
        &self.base
    }

    pub fn kind(&self) -> ColorKind {
        self.base.kind()
    }

    pub fn is_valid(&self) -> bool {
        self.kind() != ColorKind::Invalid
    }

    fn set_base(&mut self, base: BaseColor) {
        self.base = base;
        self.invalidate();
    }

    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_rgba(r, g, b, 0xFF);
    }

    pub fn set_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
        let argb = (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        self.set_argb(argb);
    }

    pub fn set_argb(&mut self, argb: u32) {
        self.set_base(BaseColor::Rgb { argb });
    }

    /// Percentage RGB (`a:scrgbClr`); channels in percent (`100.0` = full intensity).
    pub fn set_scaled_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.set_base(BaseColor::ScaledRgb(ScaledRgb {
            r: units::percent_to_raw(r),
            g: units::percent_to_raw(g),
            b: units::percent_to_raw(b),
        }));
    }

    /// Hue in degrees, saturation and luminance in percent.
    pub fn set_hsl(&mut self, hue: f64, sat: f64, lum: f64) {
        self.set_base(BaseColor::Hsl(HslColor {
            hue: units::degrees_to_raw(hue),
            sat: units::percent_to_raw(sat),
            lum: units::percent_to_raw(lum),
        }));
    }

    pub fn set_indexed_color(&mut self, index: u32) {
        self.set_base(BaseColor::Indexed { index });
    }

    /// Switch to a named preset. Names outside the preset table are ignored.
    pub fn set_preset_color(&mut self, name: &str) {
        match PresetColor::from_name(name) {
            Some(preset) => self.set_base(BaseColor::Preset { preset }),
            None => log::debug!("ignoring unknown preset color {name:?}"),
        }
    }

    pub fn set_scheme_color(&mut self, slot: SchemeColor) {
        self.set_base(BaseColor::Scheme { slot });
    }

    pub fn set_system_color(&mut self, slot: SystemColor) {
        self.set_base(BaseColor::System {
            slot,
            last_color: None,
        });
    }

    /// Record the last resolved value of the current system color.
    ///
    /// Has no effect unless the color is a system color.
    pub fn set_system_last_color(&mut self, argb: Option<u32>) {
        if let BaseColor::System { slot, .. } = self.base {
            self.set_base(BaseColor::System {
                slot,
                last_color: argb,
            });
        }
    }

    pub fn set_auto_color(&mut self) {
        self.set_base(BaseColor::Auto);
    }

    pub fn clear(&mut self) {
        self.base = BaseColor::Invalid;
        self.transforms.clear();
        self.invalidate();
    }

    /// The base RGB color, for both 8-bit and percentage RGB.
    pub fn rgb(&self) -> Option<Rgba> {
        match self.base {
            BaseColor::Rgb { .. } | BaseColor::ScaledRgb(_) => self.base.resolve(),
            _ => None,
        }
    }

    pub fn is_scaled_rgb(&self) -> bool {
        matches!(self.base, BaseColor::ScaledRgb(_))
    }

    pub fn hsl(&self) -> Option<HslColor> {
        match self.base {
            BaseColor::Hsl(hsl) => Some(hsl),
            _ => None,
        }
    }

    pub fn indexed_color(&self) -> Option<u32> {
        match self.base {
            BaseColor::Indexed { index } => Some(index),
            _ => None,
        }
    }

    pub fn preset_color_name(&self) -> Option<&'static str> {
        match self.base {
            BaseColor::Preset { preset } => Some(preset.name()),
            _ => None,
        }
    }

    pub fn scheme_color(&self) -> Option<SchemeColor> {
        match self.base {
            BaseColor::Scheme { slot } => Some(slot),
            _ => None,
        }
    }

    pub fn system_color(&self) -> Option<SystemColor> {
        match self.base {
            BaseColor::System { slot, .. } => Some(slot),
            _ => None,
        }
    }

    pub fn system_last_color(&self) -> Option<u32> {
        match self.base {
            BaseColor::System { last_color, .. } => last_color,
            _ => None,
        }
    }

    /// The base color without transforms.
    ///
    /// Scheme, indexed and automatic colors depend on the surrounding
    /// document's theme or palette and resolve to `None` here; use
    /// [`ColorValue::resolve_with`] to supply one.
    pub fn resolve(&self) -> Option<Rgba> {
        self.base.resolve()
    }

    /// The base color with every transform applied in kind order.
    pub fn transformed(&self) -> Option<Rgba> {
        self.resolve().map(|color| self.transforms.apply(color))
    }

    pub fn resolve_with(&self, palette: &ColorPalette) -> Option<Rgba> {
        palette.resolve_base(&self.base)
    }

    pub fn transformed_with(&self, palette: &ColorPalette) -> Option<Rgba> {
        self.resolve_with(palette)
            .map(|color| self.transforms.apply(color))
    }

    pub fn transforms(&self) -> &TransformSet {
        &self.transforms
    }

    pub fn set_transforms(&mut self, transforms: TransformSet) {
        self.transforms = transforms;
        self.invalidate();
    }

    pub fn add_transform(&mut self, kind: TransformKind, value: f64) {
        self.transforms.insert(kind, value);
        self.invalidate();
    }

    pub(crate) fn add_transform_raw(&mut self, kind: TransformKind, raw: i32) {
        self.transforms.insert_raw(kind, raw);
        self.invalidate();
    }

    pub fn remove_transform(&mut self, kind: TransformKind) -> Option<f64> {
        let removed = self.transforms.remove(kind);
        self.invalidate();
        removed
    }

    pub fn has_transform(&self, kind: TransformKind) -> bool {
        self.transforms.contains(kind)
    }

    pub fn transform(&self, kind: TransformKind) -> Option<f64> {
        self.transforms.get(kind)
    }

    /// Canonical byte form of this color: its DrawingML serialization.
    ///
    /// Computed on first use and cached until the next mutation.
    pub fn id_key(&self) -> &[u8] {
        self.key.get_or_init(|| codec::canonical_bytes(self))
    }

    /// Drop the cached [`ColorValue::id_key`]. Every mutator calls this.
    pub fn invalidate(&mut self) {
        self.key.take();
    }

    pub fn has_cached_key(&self) -> bool {
        self.key.get().is_some()
    }
}
