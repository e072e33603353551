use formula_color::codec::{read_attributes, write_attributes, write_element, write_simple_element};
use formula_color::{read_color, ColorValue, SchemeColor, SystemColor, TransformKind};
use pretty_assertions::assert_eq;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;
use roxmltree::Document;

fn write_complex(color: &ColorValue, prefix: Option<&str>) -> String {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, color, prefix).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

fn write_simple(color: &ColorValue) -> String {
    let mut writer = Writer::new(Vec::new());
    write_simple_element(&mut writer, color, "color").unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

fn read_back(xml: &str) -> ColorValue {
    let doc = Document::parse(xml).unwrap();
    read_color(doc.root_element()).expect("recognized color element")
}

fn read_back_prefixed(fragment: &str) -> ColorValue {
    let xml = format!(
        r#"<a:solidFill xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">{fragment}</a:solidFill>"#
    );
    let doc = Document::parse(&xml).unwrap();
    formula_color::find_color_child(doc.root_element()).expect("color child")
}

fn sample_colors() -> Vec<ColorValue> {
    let mut colors = Vec::new();

    let mut rgb = ColorValue::new();
    rgb.set_rgb(0x12, 0x34, 0x56);
    rgb.add_transform(TransformKind::LuminanceModulation, 75.0);
    colors.push(rgb);

    let mut translucent = ColorValue::new();
    translucent.set_rgba(0xFF, 0x80, 0x00, 0x40);
    colors.push(translucent);

    let mut scaled = ColorValue::new();
    scaled.set_scaled_rgb(12.5, 100.0, 0.0);
    colors.push(scaled);

    let mut hsl = ColorValue::new();
    hsl.set_hsl(210.0, 45.5, 62.0);
    hsl.add_transform(TransformKind::HueOffset, -30.0);
    colors.push(hsl);

    let mut indexed = ColorValue::new();
    indexed.set_indexed_color(22);
    indexed.add_transform(TransformKind::Tint, 40.0);
    colors.push(indexed);

    for slot in SchemeColor::ALL {
        let mut scheme = ColorValue::new();
        scheme.set_scheme_color(slot);
        scheme.add_transform(TransformKind::Shade, 50.0);
        scheme.add_transform(TransformKind::Inverse, 1.0);
        colors.push(scheme);
    }

    let mut system = ColorValue::new();
    system.set_system_color(SystemColor::ButtonFace);
    system.set_system_last_color(Some(0xFFF0F0F0));
    colors.push(system);

    let mut bare_system = ColorValue::new();
    bare_system.set_system_color(SystemColor::DarkShadow3d);
    colors.push(bare_system);

    let mut preset = ColorValue::new();
    preset.set_preset_color("dkSlateBlue");
    preset.add_transform(TransformKind::Grayscale, 1.0);
    preset.add_transform(TransformKind::AlphaOffset, -20.0);
    colors.push(preset);

    let mut auto = ColorValue::new();
    auto.set_auto_color();
    colors.push(auto);

    colors
}

#[test]
fn complex_grammar_round_trips_every_kind() {
    for color in sample_colors() {
        let xml = write_complex(&color, None);
        assert_eq!(read_back(&xml), color, "{xml}");

        let prefixed = write_complex(&color, Some("a"));
        assert_eq!(read_back_prefixed(&prefixed), color, "{prefixed}");
    }
}

#[test]
fn simple_grammar_round_trips_representable_kinds() {
    let mut colors = Vec::new();

    let mut rgb = ColorValue::new();
    rgb.set_rgba(0x12, 0x34, 0x56, 0x78);
    colors.push(rgb);

    let mut indexed = ColorValue::new();
    indexed.set_indexed_color(64);
    indexed.add_transform(TransformKind::Shade, 25.0);
    colors.push(indexed);

    for idx in 0..12 {
        let mut scheme = ColorValue::new();
        scheme.set_scheme_color(SchemeColor::from_theme_index(idx).unwrap());
        scheme.add_transform(TransformKind::Tint, 59.999);
        colors.push(scheme);
    }

    colors.push(ColorValue::auto());

    for color in colors {
        let xml = write_simple(&color);
        assert_eq!(read_back(&xml), color, "{xml}");
    }
}

#[test]
fn simple_grammar_is_lossy_for_drawing_only_kinds() {
    let mut hsl = ColorValue::new();
    hsl.set_hsl(0.0, 100.0, 50.0);
    let back = read_back(&write_simple(&hsl));
    assert_eq!(back, ColorValue::from_argb(0xFFFF0000));

    let mut system = ColorValue::new();
    system.set_system_color(SystemColor::Window);
    system.set_system_last_color(Some(0xFFFFFFFF));
    assert_eq!(write_simple(&system), r#"<color rgb="FFFFFFFF"/>"#);
}

#[test]
fn attributes_land_on_the_callers_element() {
    // A font color written by its owner, which controls the element itself.
    let mut color = ColorValue::from_scheme(SchemeColor::Dark2);
    color.add_transform(TransformKind::Tint, 79.998);

    let mut writer = Writer::new(Vec::new());
    let mut start = BytesStart::new("color");
    write_attributes(&color, &mut start);
    writer.write_event(Event::Empty(start)).unwrap();
    let xml = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(xml, r#"<color theme="2" tint="0.79998"/>"#);

    let doc = Document::parse(&xml).unwrap();
    assert_eq!(read_attributes(doc.root_element()), color);
}

#[test]
fn from_xml_str_reads_fragments() {
    let color = ColorValue::from_xml_str(
        r#"<a:schemeClr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" val="phClr"><a:satMod val="103000"/></a:schemeClr>"#,
    )
    .unwrap();
    assert_eq!(color.scheme_color(), Some(SchemeColor::Style));
    assert_eq!(color.transform(TransformKind::SaturationModulation), Some(103.0));

    assert!(ColorValue::from_xml_str("<a:srgbClr").is_err());
}
