use formula_color::{ColorValue, Rgba, SchemeColor, SystemColor, TransformKind};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn scheme_color_json_shape() {
    let mut color = ColorValue::from_scheme(SchemeColor::Accent1);
    color.add_transform(TransformKind::LuminanceModulation, 75.0);

    let value = serde_json::to_value(&color).unwrap();
    assert_eq!(
        value,
        json!({
            "base": { "type": "scheme", "slot": "accent1" },
            "transforms": { "luminanceModulation": 75000 }
        })
    );

    let back: ColorValue = serde_json::from_value(value).unwrap();
    assert_eq!(back, color);
}

#[test]
fn system_and_preset_round_trip() {
    let mut system = ColorValue::new();
    system.set_system_color(SystemColor::HotLight);
    system.set_system_last_color(Some(0xFF0066CC));

    let mut preset = ColorValue::new();
    preset.set_preset_color("cornflowerBlue");
    preset.add_transform(TransformKind::Complement, 1.0);

    for color in [system, preset, ColorValue::new()] {
        let json = serde_json::to_string(&color).unwrap();
        let back: ColorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color, "{json}");
    }
}

#[test]
fn unknown_preset_name_is_rejected() {
    let err = serde_json::from_value::<ColorValue>(json!({
        "base": { "type": "preset", "preset": "notAColor" }
    }));
    assert!(err.is_err());
}

#[test]
fn rgba_serializes_as_argb_hex() {
    let color = Rgba::from_argb(0x80123456);
    assert_eq!(serde_json::to_value(color).unwrap(), json!("#80123456"));
    let back: Rgba = serde_json::from_value(json!("#80123456")).unwrap();
    assert_eq!(back.to_argb(), 0x80123456);
    assert!(serde_json::from_value::<Rgba>(json!("123456")).is_err());
}

#[test]
fn deserialized_flags_match_flags_built_in_code() {
    let decoded: ColorValue = serde_json::from_value(json!({
        "base": { "type": "rgb", "argb": 0xFFFF0000u32 },
        "transforms": { "complement": 5 }
    }))
    .unwrap();
    let mut built = ColorValue::from_argb(0xFFFF0000);
    built.add_transform(TransformKind::Complement, 1.0);

    assert_eq!(decoded, built);
    assert_eq!(decoded.id_key(), built.id_key());
    assert_eq!(decoded.transform(TransformKind::Complement), Some(1.0));
}

#[test]
fn deserialized_zero_flag_is_absent() {
    let decoded: ColorValue = serde_json::from_value(json!({
        "base": { "type": "rgb", "argb": 0xFFFF0000u32 },
        "transforms": { "complement": 0, "tint": 0 }
    }))
    .unwrap();

    assert!(!decoded.has_transform(TransformKind::Complement));
    // Percentage kinds keep an explicit zero.
    assert_eq!(decoded.transform(TransformKind::Tint), Some(0.0));
    assert_eq!(decoded.transforms().len(), 1);
}
