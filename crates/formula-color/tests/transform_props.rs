use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use formula_color::{
    srgb_gamma, srgb_inverse_gamma, ColorValue, Rgba, SchemeColor, TransformKind, TransformSet,
};
use proptest::prelude::*;

fn hash_of(color: &ColorValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    color.hash(&mut hasher);
    hasher.finish()
}

fn arb_kind() -> impl Strategy<Value = TransformKind> {
    let kinds: Vec<TransformKind> = TransformKind::all().collect();
    prop::sample::select(kinds)
}

fn arb_entries() -> impl Strategy<Value = Vec<(TransformKind, f64)>> {
    prop::collection::vec((arb_kind(), -200.0f64..400.0), 0..8)
}

fn arb_rgba() -> impl Strategy<Value = Rgba> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

/// Last write per kind wins, so the same members in any order need unique kinds.
fn dedup_kinds(entries: Vec<(TransformKind, f64)>) -> Vec<(TransformKind, f64)> {
    let mut seen = Vec::new();
    entries
        .into_iter()
        .filter(|(kind, _)| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn insertion_order_does_not_matter(entries in arb_entries(), color in arb_rgba()) {
        let entries = dedup_kinds(entries);
        let forward: TransformSet = entries.iter().copied().collect();
        let backward: TransformSet = entries.iter().rev().copied().collect();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.apply(color), backward.apply(color));
    }

    #[test]
    fn transformed_channels_stay_in_range(entries in arb_entries(), color in arb_rgba()) {
        let set: TransformSet = entries.into_iter().collect();
        let out = set.apply(color);
        for channel in [out.r, out.g, out.b, out.a] {
            prop_assert!((0.0..=1.0).contains(&channel), "{out:?}");
        }
    }

    #[test]
    fn inverse_gamma_undoes_gamma(v in 0.0f64..=1.0) {
        prop_assert!((srgb_inverse_gamma(srgb_gamma(v)) - v).abs() < 1e-6);

        let set: TransformSet = [
            (TransformKind::InverseGamma, 1.0),
            (TransformKind::Gamma, 1.0),
        ]
        .into_iter()
        .collect();
        let out = set.apply(Rgba::new(v, v, v, 1.0));
        prop_assert!((out.r - v).abs() < 1e-6);
    }

    #[test]
    fn equal_colors_hash_equally(
        entries in arb_entries(),
        argb in any::<u32>(),
        slot in prop::sample::select(SchemeColor::ALL.to_vec()),
        use_scheme in any::<bool>(),
    ) {
        let entries = dedup_kinds(entries);
        let mut a = ColorValue::new();
        let mut b = ColorValue::new();
        if use_scheme {
            a.set_scheme_color(slot);
            b.set_scheme_color(slot);
        } else {
            a.set_argb(argb);
            b.set_argb(argb);
        }
        for (kind, value) in &entries {
            a.add_transform(*kind, *value);
        }
        for (kind, value) in entries.iter().rev() {
            b.add_transform(*kind, *value);
        }

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.id_key(), b.id_key());
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_keys_mean_different_colors(
        first in (any::<u32>(), arb_entries()),
        second in (any::<u32>(), arb_entries()),
    ) {
        let build = |(argb, entries): (u32, Vec<(TransformKind, f64)>)| {
            let mut color = ColorValue::from_argb(argb);
            for (kind, value) in entries {
                color.add_transform(kind, value);
            }
            color
        };
        let a = build(first);
        let b = build(second);
        prop_assert_eq!(a == b, a.id_key() == b.id_key());
    }
}

#[test]
fn gamma_inverse_law_on_a_grid() {
    for step in 0..=1000 {
        let v = step as f64 / 1000.0;
        assert!((srgb_inverse_gamma(srgb_gamma(v)) - v).abs() < 1e-6, "{v}");
    }
}

#[test]
fn shade_then_tint_matches_tint_then_shade() {
    let mut a = ColorValue::from_rgb(0x4F, 0x81, 0xBD);
    a.add_transform(TransformKind::Shade, 60.0);
    a.add_transform(TransformKind::Tint, 30.0);

    let mut b = ColorValue::from_rgb(0x4F, 0x81, 0xBD);
    b.add_transform(TransformKind::Tint, 30.0);
    b.add_transform(TransformKind::Shade, 60.0);

    assert_eq!(a.transformed(), b.transformed());
    assert_eq!(a, b);
}

#[test]
fn alpha_modulation_is_clamped() {
    let mut color = ColorValue::from_rgb(255, 0, 0);
    color.add_transform(TransformKind::Alpha, 50.0);
    color.add_transform(TransformKind::AlphaModulation, 500.0);
    assert_eq!(color.transformed().map(|c| c.a), Some(1.0));
}
