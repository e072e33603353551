//! Color values and color transforms for Formula's OOXML layers.
//!
//! Every place a workbook stores a color (cell fonts and fills, sheet tabs,
//! sparklines, chart series, shape fills, theme entries) uses the same model:
//!
//! - [`ColorValue`]: one base color ([`BaseColor`]: RGB, HSL, indexed, theme
//!   scheme slot, system color, preset name, or automatic) plus a
//!   [`TransformSet`] of DrawingML adjustments (tint, shade, `lumMod`, alpha,
//!   gamma, ...).
//! - [`codec`]: the two XML grammars. [`codec::simple`] is the SpreadsheetML
//!   attribute form (`rgb`/`indexed`/`theme`/`auto` + `tint`) and
//!   [`codec::complex`] the DrawingML element form (`a:srgbClr`,
//!   `a:schemeClr`, ... with nested transforms). The call site picks the
//!   grammar, not the value.
//! - [`ColorValue::id_key`]: a canonical byte key (the DrawingML
//!   serialization) used for hashing and deduplication.
//! - [`palette`]: theme/indexed palettes for resolving colors whose value
//!   lives in the surrounding document.

pub mod codec;
mod error;
pub mod palette;
mod preset;
mod rgba;
mod scheme;
mod system;
pub mod transform;
pub mod units;
mod value;

pub use codec::{find_color_child, read_color};
pub use error::ColorError;
pub use palette::{parse_theme_palette, ColorPalette, ThemePalette};
pub use preset::PresetColor;
pub use rgba::{srgb_gamma, srgb_inverse_gamma, Hsla, Rgba};
pub use scheme::SchemeColor;
pub use system::SystemColor;
pub use transform::{TransformKind, TransformSet, TransformUnit};
pub use value::{BaseColor, ColorKind, ColorValue, HslColor, ScaledRgb};
