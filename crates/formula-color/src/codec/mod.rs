//! XML grammars for [`ColorValue`].
//!
//! The same value has two on-disk shapes and the call site picks one:
//!
//! - [`simple`]: attributes on the caller's own element (`<fgColor theme="4" tint="0.4"/>`),
//!   used by SpreadsheetML styles, tab colors and sparklines.
//! - [`complex`]: a dedicated DrawingML element with nested transforms
//!   (`<a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr>`),
//!   used by drawings, charts and themes.
//!
//! Reading dispatches on the element's local name, so namespace prefixes are
//! accepted as-is.

use roxmltree::{Document, Node};

use crate::error::ColorError;
use crate::value::ColorValue;

pub mod complex;
pub mod simple;


pub use complex::{read_element, write_element};
pub use simple::{read_attributes, write_attributes, write_simple_element};

/// Read any recognized color element, Simple or Complex.
///
/// Returns `None` only when the element name is not a known color form.
pub fn read_color(node: Node<'_, '_>) -> Option<ColorValue> {
    let name = node.tag_name().name();
    if complex::is_color_element(name) {
        return complex::read_element(node);
    }
    if simple::is_host_element(name) {
        return Some(simple::read_element(node));
    }
    None
}

/// Read the first recognized color among `parent`'s child elements
/// (e.g. the color inside `a:solidFill` or a theme's `a:accent1`).
pub fn find_color_child(parent: Node<'_, '_>) -> Option<ColorValue> {
    parent
        .children()
        .filter(|n| n.is_element())
        .find_map(read_color)
}

impl ColorValue {
    /// Parse a standalone color fragment such as `<a:srgbClr val="FF0000"/>`.
    pub fn from_xml_str(xml: &str) -> Result<ColorValue, ColorError> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        read_color(root)
            .ok_or_else(|| ColorError::UnrecognizedElement(root.tag_name().name().to_string()))
    }
}

/// Canonical key bytes: the unprefixed Complex serialization.
pub(crate) fn canonical_bytes(color: &ColorValue) -> Vec<u8> {
    let mut writer = quick_xml::Writer::new(Vec::new());
    match complex::write_element(&mut writer, color, None) {
        Ok(()) => writer.into_inner(),
        Err(err) => {
            log::warn!("failed to serialize color key: {err}");
            Vec::new()
        }
    }
}
