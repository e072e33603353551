//! The attribute-only SpreadsheetML grammar (`CT_Color`).
//!
//! Exactly one of `rgb="AARRGGBB"`, `indexed="N"`, `theme="0..11"` or
//! `auto="1"`, plus an optional signed `tint` fraction. Values this grammar
//! cannot express are written lossily: DrawingML-only kinds as their
//! resolved RGB, theme slots without an index not at all.

use std::io::Write;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;
use roxmltree::Node;

use crate::scheme::SchemeColor;
use crate::transform::TransformKind;
use crate::units;
use crate::value::{BaseColor, ColorValue};

/// Elements that carry a color in the Simple grammar.
const HOST_ELEMENTS: &[&str] = &[
    "color",
    "fgColor",
    "bgColor",
    "tabColor",
    "negativeFillColor",
    "negativeBorderColor",
    "axisColor",
    "colorSeries",
    "colorNegative",
    "colorAxis",
    "colorMarkers",
    "colorFirst",
    "colorLast",
    "colorHigh",
    "colorLow",
];

pub(crate) fn is_host_element(name: &str) -> bool {
    HOST_ELEMENTS.contains(&name)
}

/// Read the color attributes of `node`.
///
/// Presence is checked in the order `rgb`, `indexed`, `theme`, `auto`; the
/// first one found decides the kind even if its value fails to parse, in
/// which case the color stays invalid.
pub fn read_attributes(node: Node<'_, '_>) -> ColorValue {
    let mut color = ColorValue::new();

    if let Some(rgb) = node.attribute("rgb") {
        if let Some(argb) = units::parse_hex_rgb(rgb) {
            color.set_argb(argb);
        }
    } else if let Some(indexed) = node.attribute("indexed") {
        if let Ok(index) = indexed.trim().parse::<u32>() {
            color.set_indexed_color(index);
        }
    } else if let Some(theme) = node.attribute("theme") {
        match theme
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(SchemeColor::from_theme_index)
        {
            Some(slot) => color.set_scheme_color(slot),
            None => log::debug!("ignoring unsupported theme index {theme:?}"),
        }
    } else if let Some(auto) = node.attribute("auto") {
        if units::parse_bool(auto) == Some(true) {
            color.set_auto_color();
        }
    }

    if let Some(tint) = node.attribute("tint") {
        let tint = tint.trim().parse::<f64>().unwrap_or(0.0);
        if tint > 0.0 {
            color.add_transform(TransformKind::Tint, tint * 100.0);
        } else if tint < 0.0 {
            color.add_transform(TransformKind::Shade, -tint * 100.0);
        }
    }

    color
}

/// Read a Simple-grammar element, including any transforms nested inside it.
///
/// Plain SpreadsheetML never nests children here, but the canonical form of
/// indexed and automatic colors does.
pub(crate) fn read_element(node: Node<'_, '_>) -> ColorValue {
    let mut color = read_attributes(node);
    super::complex::read_transforms(node, &mut color);
    color
}

/// The attribute that identifies the base color, if this grammar can express it.
pub(crate) fn kind_attribute(color: &ColorValue) -> Option<(&'static str, String)> {
    match color.base() {
        BaseColor::Invalid => None,
        BaseColor::Auto => Some(("auto", "1".to_string())),
        BaseColor::Indexed { index } => Some(("indexed", index.to_string())),
        BaseColor::Scheme { slot } => {
            let index = slot.theme_index();
            if index.is_none() {
                log::debug!("scheme color {slot:?} has no theme index; omitting it");
            }
            index.map(|idx| ("theme", idx.to_string()))
        }
        _ => color
            .resolve()
            .map(|rgba| ("rgb", units::format_hex_argb(rgba.to_argb()))),
    }
}

/// `Tint` maps to a positive fraction, `Shade` to a negative one.
fn tint_attribute(color: &ColorValue) -> Option<String> {
    let transforms = color.transforms();
    let tint = match (
        transforms
            .get_raw(TransformKind::Tint)
            .filter(|raw| *raw != 0),
        transforms.get_raw(TransformKind::Shade),
    ) {
        (Some(raw), _) => raw as f64 / 100_000.0,
        (None, Some(raw)) => -(raw as f64) / 100_000.0,
        (None, None) => return None,
    };
    (tint != 0.0).then(|| tint.to_string())
}

/// Push the color attributes onto the caller's element.
///
/// Only indexed and theme colors carry `tint`; other kinds are written as
/// their untransformed base value.
pub fn write_attributes(color: &ColorValue, start: &mut BytesStart<'_>) {
    let Some((key, value)) = kind_attribute(color) else {
        return;
    };
    start.push_attribute((key, value.as_str()));

    if matches!(
        color.base(),
        BaseColor::Indexed { .. } | BaseColor::Scheme { .. }
    ) {
        if let Some(tint) = tint_attribute(color) {
            start.push_attribute(("tint", tint.as_str()));
        }
    }
}

/// Write `<element_name .../>` carrying `color` in the Simple grammar.
///
/// Nothing is written for an empty element name or an invalid color.
pub fn write_simple_element<W: Write>(
    writer: &mut Writer<W>,
    color: &ColorValue,
    element_name: &str,
) -> Result<(), quick_xml::Error> {
    if element_name.is_empty() || !color.is_valid() {
        return Ok(());
    }
    let mut start = BytesStart::new(element_name);
    write_attributes(color, &mut start);
    writer.write_event(Event::Empty(start))?;
    Ok(())
}
