//! The nested-element DrawingML grammar (`EG_ColorChoice` + `EG_ColorTransform`).

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use roxmltree::Node;

use crate::preset::PresetColor;
use crate::scheme::SchemeColor;
use crate::system::SystemColor;
use crate::transform::{TransformKind, TransformUnit};
use crate::units;
use crate::value::{BaseColor, ColorValue, HslColor, ScaledRgb};

/// SpreadsheetML element used for kinds DrawingML has no element for
/// (indexed, automatic, and an invalid base that still carries transforms).
const FALLBACK_ELEMENT: &str = "color";

pub(crate) fn is_color_element(name: &str) -> bool {
    matches!(
        name,
        "srgbClr" | "scrgbClr" | "hslClr" | "sysClr" | "schemeClr" | "prstClr"
    )
}

/// Read a DrawingML color element and its transforms.
///
/// Returns `None` for an element that is not a color. A recognized element
/// with a missing or unknown `val` yields an invalid color.
pub fn read_element(node: Node<'_, '_>) -> Option<ColorValue> {
    let base = match node.tag_name().name() {
        "srgbClr" => node
            .attribute("val")
            .and_then(units::parse_hex_rgb)
            .map(|argb| BaseColor::Rgb { argb })
            .unwrap_or_default(),
        "scrgbClr" => BaseColor::ScaledRgb(ScaledRgb {
            r: percentage_attr(node, "r"),
            g: percentage_attr(node, "g"),
            b: percentage_attr(node, "b"),
        }),
        "hslClr" => BaseColor::Hsl(HslColor {
            hue: node
                .attribute("hue")
                .and_then(units::parse_angle)
                .unwrap_or(0),
            sat: percentage_attr(node, "sat"),
            lum: percentage_attr(node, "lum"),
        }),
        "sysClr" => match node.attribute("val").and_then(SystemColor::from_token) {
            Some(slot) => BaseColor::System {
                slot,
                last_color: node.attribute("lastClr").and_then(units::parse_hex_rgb),
            },
            None => BaseColor::Invalid,
        },
        "schemeClr" => node
            .attribute("val")
            .and_then(SchemeColor::from_token)
            .map(|slot| BaseColor::Scheme { slot })
            .unwrap_or_default(),
        "prstClr" => node
            .attribute("val")
            .and_then(PresetColor::from_name)
            .map(|preset| BaseColor::Preset { preset })
            .unwrap_or_default(),
        FALLBACK_ELEMENT => return Some(super::simple::read_element(node)),
        _ => return None,
    };

    let mut color = ColorValue::from(base);
    read_transforms(node, &mut color);
    Some(color)
}

fn percentage_attr(node: Node<'_, '_>, name: &str) -> i32 {
    node.attribute(name)
        .and_then(units::parse_percentage)
        .unwrap_or(0)
}

/// Read transform children in document order. A repeated kind replaces the
/// earlier one; unknown children are skipped.
pub(crate) fn read_transforms(node: Node<'_, '_>, color: &mut ColorValue) {
    for child in node.children().filter(|n| n.is_element()) {
        let name = child.tag_name().name();
        let Some(kind) = TransformKind::from_token(name) else {
            log::debug!("skipping unsupported color transform <{name}>");
            continue;
        };
        let val = child.attribute("val");
        let raw = match kind.unit() {
            TransformUnit::Percentage => val.and_then(units::parse_percentage).unwrap_or(0),
            TransformUnit::Angle => val.and_then(units::parse_angle).unwrap_or(0),
            TransformUnit::Flag => 1,
        };
        color.add_transform_raw(kind, raw);
    }
}

/// Hex for `val`/`lastClr`: `RRGGBB` when opaque, `AARRGGBB` otherwise so no
/// alpha is lost.
fn hex_value(argb: u32) -> String {
    if argb >> 24 == 0xFF {
        units::format_hex_rgb(argb)
    } else {
        units::format_hex_argb(argb)
    }
}

fn element_for(color: &ColorValue) -> Option<(&'static str, Vec<(&'static str, String)>)> {
    let element = match *color.base() {
        BaseColor::Rgb { argb } => ("srgbClr", vec![("val", hex_value(argb))]),
        BaseColor::ScaledRgb(rgb) => (
            "scrgbClr",
            vec![
                ("r", rgb.r.to_string()),
                ("g", rgb.g.to_string()),
                ("b", rgb.b.to_string()),
            ],
        ),
        BaseColor::Hsl(hsl) => (
            "hslClr",
            vec![
                ("hue", hsl.hue.to_string()),
                ("sat", hsl.sat.to_string()),
                ("lum", hsl.lum.to_string()),
            ],
        ),
        BaseColor::System { slot, last_color } => {
            let mut attrs = vec![("val", slot.to_token().to_string())];
            if let Some(last) = last_color {
                attrs.push(("lastClr", hex_value(last)));
            }
            ("sysClr", attrs)
        }
        BaseColor::Scheme { slot } => ("schemeClr", vec![("val", slot.to_token().to_string())]),
        BaseColor::Preset { preset } => ("prstClr", vec![("val", preset.name().to_string())]),
        BaseColor::Invalid if color.transforms().is_empty() => return None,
        BaseColor::Invalid | BaseColor::Auto | BaseColor::Indexed { .. } => (
            FALLBACK_ELEMENT,
            super::simple::kind_attribute(color).into_iter().collect(),
        ),
    };
    Some(element)
}

fn qualified(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Write `color` as a DrawingML color element, with its transforms as children
/// in application order.
pub fn write_element<W: Write>(
    writer: &mut Writer<W>,
    color: &ColorValue,
    prefix: Option<&str>,
) -> Result<(), quick_xml::Error> {
    let Some((local, attrs)) = element_for(color) else {
        return Ok(());
    };

    let name = qualified(prefix, local);
    let mut start = BytesStart::new(name.as_str());
    for (key, value) in &attrs {
        start.push_attribute((*key, value.as_str()));
    }

    if color.transforms().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for (kind, raw) in color.transforms().iter_raw() {
        let child_name = qualified(prefix, kind.to_token());
        let mut child = BytesStart::new(child_name.as_str());
        if !kind.is_flag() {
            child.push_attribute(("val", raw.to_string().as_str()));
        }
        writer.write_event(Event::Empty(child))?;
    }
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    Ok(())
}
