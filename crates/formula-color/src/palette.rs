//! Document-level color context: the theme color scheme and the indexed palette.
//!
//! Scheme and indexed colors only mean something relative to the document
//! that contains them. These tables supply that context to
//! [`ColorValue::resolve_with`](crate::ColorValue::resolve_with).

use roxmltree::Document;

use crate::codec;
use crate::error::ColorError;
use crate::rgba::Rgba;
use crate::scheme::SchemeColor;
use crate::value::BaseColor;

/// The twelve concrete theme colors from `a:clrScheme`.
///
/// Colors are stored as ARGB (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub dk1: u32,
    pub lt1: u32,
    pub dk2: u32,
    pub lt2: u32,
    pub accent1: u32,
    pub accent2: u32,
    pub accent3: u32,
    pub accent4: u32,
    pub accent5: u32,
    pub accent6: u32,
    pub hlink: u32,
    pub fol_hlink: u32,
}

impl Default for ThemePalette {
    fn default() -> Self {
        // Office theme; also what a document without a theme part implies.
        Self {
            dk1: 0xFF000000,
            lt1: 0xFFFFFFFF,
            dk2: 0xFF1F497D,
            lt2: 0xFFEEECE1,
            accent1: 0xFF4F81BD,
            accent2: 0xFFC0504D,
            accent3: 0xFF9BBB59,
            accent4: 0xFF8064A2,
            accent5: 0xFF4BACC6,
            accent6: 0xFFF79646,
            hlink: 0xFF0000FF,
            fol_hlink: 0xFF800080,
        }
    }
}

impl ThemePalette {
    /// Look up a scheme slot, following the `bg*`/`tx*` aliases.
    ///
    /// `phClr` has no value of its own and returns `None`.
    pub fn get(&self, slot: SchemeColor) -> Option<u32> {
        let argb = match slot.canonical()? {
            SchemeColor::Dark1 => self.dk1,
            SchemeColor::Light1 => self.lt1,
            SchemeColor::Dark2 => self.dk2,
            SchemeColor::Light2 => self.lt2,
            SchemeColor::Accent1 => self.accent1,
            SchemeColor::Accent2 => self.accent2,
            SchemeColor::Accent3 => self.accent3,
            SchemeColor::Accent4 => self.accent4,
            SchemeColor::Accent5 => self.accent5,
            SchemeColor::Accent6 => self.accent6,
            SchemeColor::Hyperlink => self.hlink,
            SchemeColor::FollowedHyperlink => self.fol_hlink,
            _ => return None,
        };
        Some(argb)
    }

    fn slot_mut(&mut self, slot: SchemeColor) -> Option<&mut u32> {
        match slot {
            SchemeColor::Dark1 => Some(&mut self.dk1),
            SchemeColor::Light1 => Some(&mut self.lt1),
            SchemeColor::Dark2 => Some(&mut self.dk2),
            SchemeColor::Light2 => Some(&mut self.lt2),
            SchemeColor::Accent1 => Some(&mut self.accent1),
            SchemeColor::Accent2 => Some(&mut self.accent2),
            SchemeColor::Accent3 => Some(&mut self.accent3),
            SchemeColor::Accent4 => Some(&mut self.accent4),
            SchemeColor::Accent5 => Some(&mut self.accent5),
            SchemeColor::Accent6 => Some(&mut self.accent6),
            SchemeColor::Hyperlink => Some(&mut self.hlink),
            SchemeColor::FollowedHyperlink => Some(&mut self.fol_hlink),
            _ => None,
        }
    }
}

/// Parse a theme part (`xl/theme/theme1.xml`) and extract its color scheme.
///
/// Each scheme entry is read as a full color, so `sysClr lastClr` snapshots and
/// nested transforms are honored. Missing or unresolvable entries keep the
/// Office defaults.
pub fn parse_theme_palette(theme_xml: &[u8]) -> Result<ThemePalette, ColorError> {
    let xml = std::str::from_utf8(theme_xml)?;
    let doc = Document::parse(xml)?;

    let mut palette = ThemePalette::default();

    let Some(clr_scheme) = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "clrScheme")
    else {
        return Ok(palette);
    };

    for entry in clr_scheme.children().filter(|n| n.is_element()) {
        let Some(slot) = SchemeColor::from_token(entry.tag_name().name()) else {
            continue;
        };
        let Some(color) = codec::find_color_child(entry) else {
            continue;
        };
        // Theme entries cannot refer to the theme itself, so the default
        // palette only supplies system color fallbacks here.
        let resolved = color.transformed_with(&ColorPalette::default());
        if let (Some(target), Some(resolved)) = (palette.slot_mut(slot), resolved) {
            *target = resolved.to_argb();
        }
    }

    Ok(palette)
}

/// ECMA-376 / SpreadsheetML default `indexedColors` palette (0..=63), as ARGB.
pub const DEFAULT_INDEXED_COLORS: [u32; 64] = [
    0xFF000000, 0xFFFFFFFF, 0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFF00, 0xFFFF00FF,
    0xFF00FFFF, 0xFF000000, 0xFFFFFFFF, 0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFF00,
    0xFFFF00FF, 0xFF00FFFF, 0xFF800000, 0xFF008000, 0xFF000080, 0xFF808000, 0xFF800080,
    0xFF008080, 0xFFC0C0C0, 0xFF808080, 0xFF9999FF, 0xFF993366, 0xFFFFFFCC, 0xFFCCFFFF,
    0xFF660066, 0xFFFF8080, 0xFF0066CC, 0xFFCCCCFF, 0xFF000080, 0xFFFF00FF, 0xFFFFFF00,
    0xFF00FFFF, 0xFF800080, 0xFF800000, 0xFF008080, 0xFF0000FF, 0xFF00CCFF, 0xFFCCFFFF,
    0xFFCCFFCC, 0xFFFFFF99, 0xFF99CCFF, 0xFFFF99CC, 0xFFCC99FF, 0xFFFFCC99, 0xFF3366FF,
    0xFF33CCCC, 0xFF99CC00, 0xFFFFCC00, 0xFFFF9900, 0xFFFF6600, 0xFF666699, 0xFF969696,
    0xFF003366, 0xFF339966, 0xFF003300, 0xFF333300, 0xFF993300, 0xFF993366, 0xFF333399,
    0xFF333333,
];

/// Indexed color 64: system foreground.
pub const INDEXED_SYSTEM_FOREGROUND: u32 = 64;
/// Indexed color 65: system background.
pub const INDEXED_SYSTEM_BACKGROUND: u32 = 65;

/// Everything needed to resolve context-dependent colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    pub theme: ThemePalette,
    /// Custom `styles.xml` `indexedColors`; entries past its end fall back to the default table.
    pub indexed: Option<Vec<u32>>,
}

impl ColorPalette {
    pub fn new(theme: ThemePalette) -> Self {
        Self {
            theme,
            indexed: None,
        }
    }

    pub fn with_indexed_colors(mut self, indexed: Vec<u32>) -> Self {
        self.indexed = Some(indexed);
        self
    }

    pub fn indexed_argb(&self, index: u32) -> Option<u32> {
        if let Some(custom) = self.indexed.as_ref().and_then(|c| c.get(index as usize)) {
            return Some(*custom);
        }
        match index {
            INDEXED_SYSTEM_FOREGROUND => Some(0xFF000000),
            INDEXED_SYSTEM_BACKGROUND => Some(0xFFFFFFFF),
            _ => DEFAULT_INDEXED_COLORS.get(index as usize).copied(),
        }
    }

    pub(crate) fn resolve_base(&self, base: &BaseColor) -> Option<Rgba> {
        match base {
            BaseColor::Scheme { slot } => self.theme.get(*slot).map(Rgba::from_argb),
            BaseColor::Indexed { index } => self.indexed_argb(*index).map(Rgba::from_argb),
            BaseColor::System { slot, last_color } => Some(Rgba::from_argb(
                last_color.unwrap_or_else(|| slot.default_argb()),
            )),
            other => other.resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorValue;

    #[test]
    fn parses_palette_from_theme_xml() {
        let theme = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="111111"/></a:dk1>
      <a:lt1><a:sysClr val="window"><a:shade val="50000"/></a:sysClr></a:lt1>
      <a:dk2><a:srgbClr val="222222"/></a:dk2>
      <a:lt2><a:srgbClr val="DDDDDD"/></a:lt2>
      <a:accent1><a:srgbClr val="010203"/></a:accent1>
      <a:accent2><a:srgbClr val="040506"/></a:accent2>
      <a:accent3><a:srgbClr val="070809"/></a:accent3>
      <a:accent4><a:srgbClr val="0A0B0C"/></a:accent4>
      <a:accent5><a:srgbClr val="0D0E0F"/></a:accent5>
      <a:accent6><a:prstClr val="red"/></a:accent6>
      <a:hlink><a:srgbClr val="131415"/></a:hlink>
      <a:folHlink><a:srgbClr val="FFFFFF"><a:shade val="50000"/></a:srgbClr></a:folHlink>
    </a:clrScheme>
  </a:themeElements>
</a:theme>"#;

        let palette = parse_theme_palette(theme.as_bytes()).expect("parse theme");
        assert_eq!(palette.dk1, 0xFF111111);
        // Fallback system value still goes through the entry's transforms.
        assert_eq!(palette.lt1, 0xFF808080);
        assert_eq!(palette.dk2, 0xFF222222);
        assert_eq!(palette.lt2, 0xFFDDDDDD);
        assert_eq!(palette.accent1, 0xFF010203);
        assert_eq!(palette.accent6, 0xFFFF0000);
        assert_eq!(palette.hlink, 0xFF131415);
        assert_eq!(palette.fol_hlink, 0xFF808080);
    }

    #[test]
    fn missing_color_scheme_uses_defaults() {
        let palette = parse_theme_palette(b"<theme/>").expect("parse theme");
        assert_eq!(palette, ThemePalette::default());
    }

    #[test]
    fn malformed_theme_is_an_error() {
        assert!(parse_theme_palette(b"<theme>").is_err());
        assert!(parse_theme_palette(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn scheme_aliases_follow_concrete_slots() {
        let palette = ThemePalette::default();
        assert_eq!(palette.get(SchemeColor::Background1), Some(palette.lt1));
        assert_eq!(palette.get(SchemeColor::Text1), Some(palette.dk1));
        assert_eq!(palette.get(SchemeColor::Background2), Some(palette.lt2));
        assert_eq!(palette.get(SchemeColor::Text2), Some(palette.dk2));
        assert_eq!(palette.get(SchemeColor::Style), None);
    }

    #[test]
    fn indexed_palette_prefers_custom_entries() {
        let palette = ColorPalette::default().with_indexed_colors(vec![0xFF010101, 0xFF020202]);
        assert_eq!(palette.indexed_argb(1), Some(0xFF020202));
        assert_eq!(palette.indexed_argb(2), Some(0xFFFF0000));
        assert_eq!(palette.indexed_argb(64), Some(0xFF000000));
        assert_eq!(palette.indexed_argb(65), Some(0xFFFFFFFF));
        assert_eq!(palette.indexed_argb(66), None);
    }

    #[test]
    fn resolve_with_palette() {
        let palette = ColorPalette::default();

        let mut accent = ColorValue::from_scheme(SchemeColor::Accent1);
        assert_eq!(
            accent.resolve_with(&palette).map(Rgba::to_argb),
            Some(0xFF4F81BD)
        );
        accent.add_transform(crate::TransformKind::Shade, 0.0);
        assert_eq!(
            accent.transformed_with(&palette).map(Rgba::to_argb),
            Some(0xFF000000)
        );

        let mut window = ColorValue::new();
        window.set_system_color(crate::SystemColor::Window);
        assert_eq!(
            window.resolve_with(&palette).map(Rgba::to_argb),
            Some(0xFFFFFFFF)
        );

        assert_eq!(ColorValue::auto().resolve_with(&palette), None);
    }
}
