use approx::assert_abs_diff_eq;
use maker_rs::Layer;
use plategen_core::{AcousticCutoutType, Decimal, Key, Options};
use plategen_parser::resolve;
use plategen_plate::{build, BoundingBox, PlateError};
use proptest::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn two_unit_keys_with_defaults() {
    let keys = resolve(r#"[["a","b"]]"#).unwrap();
    let result = build(&keys, &Options::default()).unwrap();

    let names: Vec<&str> = result.models.keys().map(String::as_str).collect();
    assert_eq!(names, ["Switch0", "Switch1", "BoundingBox0"]);
    assert_eq!(result.bounds.width(), dec!(38.1));
    assert_eq!(result.bounds.height(), dec!(19.05));

    let (lo, hi) = result.models["BoundingBox0"].extents().unwrap();
    assert_abs_diff_eq!(lo[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(hi[0], 38.1, epsilon = 1e-9);
    assert_abs_diff_eq!(lo[1], -19.05, epsilon = 1e-9);
    assert_abs_diff_eq!(hi[1], 0.0, epsilon = 1e-9);
}

#[test]
fn rebuilding_gives_identical_output() {
    let keys = resolve(
        r#"[["Esc","1",{w:2},"Bksp"],[{w:1.5},"Tab",{r:15,rx:3,ry:1},"Q",{w:6.25},"Space"]]"#,
    )
    .unwrap();
    let opts = Options {
        switch_pattern: true,
        plate_pattern: true,
        extreme_slot: true,
        ..Options::default()
    };
    let first = build(&keys, &opts).unwrap();
    let second = build(&keys, &opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn vertical_key_aperture_is_turned() {
    let opts = Options {
        switch_width: dec!(14),
        switch_height: dec!(15),
        switch_fillet_radius: dec!(0),
        ..Options::default()
    };
    let keys = resolve(r#"[[{h:2},"Enter",{h:2,_so:1},"Fixed"]]"#).unwrap();
    let result = build(&keys, &opts).unwrap();

    let turned = &result.models["Switch0"];
    let [ox, oy] = turned.origin.unwrap();
    let (lo, hi) = turned.extents().unwrap();
    assert_abs_diff_eq!(hi[0] - ox, 7.5, epsilon = 1e-9);
    assert_abs_diff_eq!(lo[1] - oy, -7.0, epsilon = 1e-9);

    let kept = &result.models["Switch1"];
    let [ox, oy] = kept.origin.unwrap();
    let (lo, hi) = kept.extents().unwrap();
    assert_abs_diff_eq!(hi[0] - ox, 7.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lo[1] - oy, -7.5, epsilon = 1e-9);
}

#[test]
fn every_pattern_family_lands_on_its_layers() {
    let opts = Options {
        switch_pattern: true,
        stabilizer_pattern: true,
        acoustic_cutout_type: AcousticCutoutType::MxBasic,
        acoustic_pattern: true,
        extreme_slot: true,
        slot_pattern: true,
        plate_pattern: true,
        ..Options::default()
    };
    let keys = resolve(r#"[[{w:2},"Shift"]]"#).unwrap();
    let result = build(&keys, &opts).unwrap();

    let expected = [
        ("Switch0", Layer::Plate),
        ("SwitchTop0", Layer::Top),
        ("SwitchBottomSolder0", Layer::BottomSolderMask),
        ("Stabilizer0", Layer::Plate),
        ("StabilizerBottom0", Layer::Bottom),
        ("Acoustic0", Layer::Plate),
        ("AcousticTopSolder0", Layer::TopSolderMask),
        ("ExtremeSlot0", Layer::Plate),
        ("SlotTop0", Layer::Top),
        ("SlotTopCorner0", Layer::Top),
        ("SlotBottomSolderCorner0", Layer::BottomSolderMask),
        ("BoundingBox0", Layer::Plate),
        ("PlateTop", Layer::Top),
        ("PlateBottomSolder", Layer::BottomSolderMask),
    ];
    for (name, layer) in expected {
        assert_eq!(result.models[name].layer, Some(layer), "{name}");
    }
    // Five families of four pattern layers, four slot corner layers, four bases and the outline.
    assert_eq!(result.models.len(), 5 * 4 + 4 + 4 + 1);
    assert_eq!(result.models_on(Layer::Plate).count(), 5);
}

#[test]
fn patterns_surround_their_cutout() {
    let opts = Options {
        switch_pattern: true,
        ..Options::default()
    };
    let keys = resolve(r#"[["a"]]"#).unwrap();
    let result = build(&keys, &opts).unwrap();

    let (base_lo, base_hi) = result.models["Switch0"].extents().unwrap();
    let (top_lo, top_hi) = result.models["SwitchTop0"].extents().unwrap();
    let (mask_lo, mask_hi) = result.models["SwitchTopSolder0"].extents().unwrap();
    assert_abs_diff_eq!(top_hi[0] - base_hi[0], 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(base_lo[1] - top_lo[1], 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(mask_hi[1] - base_hi[1], 0.2755, epsilon = 1e-6);
    assert_abs_diff_eq!(base_lo[0] - mask_lo[0], 0.2755, epsilon = 1e-6);
}

#[test]
fn base_model_precedes_its_pattern_layers() {
    let opts = Options {
        switch_pattern: true,
        ..Options::default()
    };
    let keys = resolve(r#"[["a","b"]]"#).unwrap();
    let result = build(&keys, &opts).unwrap();

    let names: Vec<&str> = result.models.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        [
            "Switch0",
            "SwitchTop0",
            "SwitchBottom0",
            "SwitchTopSolder0",
            "SwitchBottomSolder0",
            "Switch1",
            "SwitchTop1",
            "SwitchBottom1",
            "SwitchTopSolder1",
            "SwitchBottomSolder1",
            "BoundingBox0",
        ]
    );
}

#[test]
fn key_beyond_millimetre_range_is_an_error() {
    // The key itself is representable in key units; scaling to millimetres is not.
    let keys = resolve(r#"[[{x:5e27},"a"]]"#).unwrap();
    assert_eq!(keys.len(), 1);
    assert!(matches!(
        build(&keys, &Options::default()),
        Err(PlateError::KeyOutOfRange { key: 0 })
    ));
}

#[test]
fn plate_wider_than_decimal_range_is_an_error() {
    let keys = resolve(r#"[[{x:3e27},"a"],[{x:-3e27},"b"]]"#).unwrap();
    assert!(matches!(
        build(&keys, &Options::default()),
        Err(PlateError::ExtentOutOfRange)
    ));
}

fn quarter(q: i64) -> Decimal {
    Decimal::new(q * 25, 2)
}

fn arb_key() -> impl Strategy<Value = Key> {
    (0i64..80, 0i64..24, 4i64..28, 4i64..9).prop_map(|(x, y, w, h)| {
        Key::builder()
            .x(quarter(x))
            .y(quarter(y))
            .width(quarter(w))
            .height(quarter(h))
            .build()
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bounds_are_the_union_of_footprints_in_any_order(
        keys in proptest::collection::vec(arb_key(), 1..10),
    ) {
        let opts = Options::default();
        let expected =
            BoundingBox::union(keys.iter().map(|k| BoundingBox::of_key(k, &opts).unwrap()));

        let forward = build(&keys, &opts).unwrap();
        let mut reversed_keys = keys.clone();
        reversed_keys.reverse();
        let reversed = build(&reversed_keys, &opts).unwrap();

        prop_assert_eq!(Some(forward.bounds), expected);
        prop_assert_eq!(forward.bounds, reversed.bounds);
    }
}
