//! PCB pattern layers: copper and solder-mask outlines derived from plate geometry.
//!
//! Cutouts get outward outlines of their own contour. The plate outline instead gets inset
//! rectangles built straight from the bounding box, with optional corner arcs that echo the
//! plate fillet.

use indexmap::IndexMap;
use maker_rs::{outline, Layer, Model, Path};
use plategen_core::decimal::emit;
use plategen_core::{Decimal, Options};

use crate::bbox::BoundingBox;
use crate::shapes::{fillet_corners, rectangle};
use crate::PlateError;

/// One model per PCB layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayers {
    pub top: Model,
    pub bottom: Model,
    pub top_solder_mask: Model,
    pub bottom_solder_mask: Model,
}

impl PatternLayers {
    /// Copper geometry goes on both copper layers, mask geometry on both mask layers.
    fn mirrored(copper: Model, mask: Model) -> Self {
        Self {
            top: copper.clone().with_layer(Layer::Top),
            bottom: copper.with_layer(Layer::Bottom),
            top_solder_mask: mask.clone().with_layer(Layer::TopSolderMask),
            bottom_solder_mask: mask.with_layer(Layer::BottomSolderMask),
        }
    }

    /// Inserts the layers as `{prefix}Top{suffix}`, `{prefix}Bottom{suffix}`,
    /// `{prefix}TopSolder{suffix}` and `{prefix}BottomSolder{suffix}`. Empty layers are skipped.
    pub fn insert_into(self, models: &mut IndexMap<String, Model>, prefix: &str, suffix: &str) {
        let layers = [
            ("Top", self.top),
            ("Bottom", self.bottom),
            ("TopSolder", self.top_solder_mask),
            ("BottomSolder", self.bottom_solder_mask),
        ];
        for (layer, model) in layers {
            if model.is_empty() {
                continue;
            }
            models.insert(format!("{prefix}{layer}{suffix}"), model);
        }
    }
}

/// Outward outlines of `base`: copper at `line_width / 2`, solder mask at
/// `(line_width + solder_mask_expansion) / 2`.
pub fn derive_pattern_layers(
    base: &Model,
    line_width: Decimal,
    solder_mask_expansion: Decimal,
) -> Result<PatternLayers, PlateError> {
    let copper = outline(base, emit(line_width / Decimal::TWO), false)?;
    let mask = outline(
        base,
        emit((line_width + solder_mask_expansion) / Decimal::TWO),
        false,
    )?;
    Ok(PatternLayers::mirrored(copper, mask))
}

/// Plate pattern: rectangles inset from the bounding box, corner-filleted and decorated with
/// arcs concentric with the plate fillet when `plate_pattern_radius` is positive.
pub fn plate_pattern_layers(
    bbox: &BoundingBox,
    options: &Options,
) -> Result<PatternLayers, PlateError> {
    let lw = options.plate_line_width;
    let exp = options.plate_solder_mask_expansion;
    let half_exp = exp / Decimal::TWO;

    let mut copper = inset_rectangle(bbox, lw / Decimal::TWO);
    let mut mask = inset_rectangle(bbox, (lw + exp) / Decimal::TWO);

    if options.plate_pattern_radius > Decimal::ZERO {
        let radius = options.plate_pattern_radius * Decimal::TWO;
        fillet_corners(&mut copper, emit(radius))?;
        let mask_radius = radius - half_exp;
        if mask_radius > Decimal::ZERO {
            fillet_corners(&mut mask, emit(mask_radius))?;
        }

        let arc_radius = options.plate_radius - lw / Decimal::TWO;
        add_plate_corner_arcs(&mut copper, bbox, options.plate_radius, arc_radius);
        add_plate_corner_arcs(&mut mask, bbox, options.plate_radius, arc_radius - half_exp);
    }

    Ok(PatternLayers::mirrored(copper, mask))
}

/// Decoration for the extreme slot: quarter arcs just inside each housing corner, opening toward
/// the aperture center. Centered on the local origin like the slot itself.
pub fn slot_corner_layers(options: &Options) -> PatternLayers {
    let r = options.slot_pattern_radius;
    let reach = options.slot_line_width + r;
    let x = options.switch_width / Decimal::TWO + options.switch_housing_width - reach;
    let y = options.switch_height / Decimal::TWO + options.switch_housing_width - reach;

    let copper_radius = r * Decimal::TWO;
    let mask_radius = copper_radius - options.slot_solder_mask_expansion / Decimal::TWO;
    PatternLayers::mirrored(
        slot_corner_arcs(x, y, copper_radius),
        slot_corner_arcs(x, y, mask_radius),
    )
}

fn inset_rectangle(bbox: &BoundingBox, inset: Decimal) -> Model {
    rectangle(
        emit(bbox.min_x + inset),
        emit(bbox.max_x - inset),
        emit(-(bbox.max_y - inset)),
        emit(-(bbox.min_y + inset)),
    )
}

fn add_plate_corner_arcs(
    model: &mut Model,
    bbox: &BoundingBox,
    plate_radius: Decimal,
    radius: Decimal,
) {
    if radius <= Decimal::ZERO {
        tracing::warn!(%radius, "plate corner arcs collapse; omitting them");
        return;
    }
    let left = emit(bbox.min_x + plate_radius);
    let right = emit(bbox.max_x - plate_radius);
    let upper = emit(-bbox.max_y + plate_radius);
    let lower = emit(-bbox.min_y - plate_radius);
    let arcs = [
        ([left, upper], 180.0, 270.0),
        ([right, upper], 270.0, 360.0),
        ([left, lower], 90.0, 180.0),
        ([right, lower], 0.0, 90.0),
    ];
    for (i, (center, start, end)) in arcs.into_iter().enumerate() {
        model.add_path(
            format!("beautyArc{i}"),
            Path::arc(center, emit(radius), start, end),
        );
    }
}

fn slot_corner_arcs(x: Decimal, y: Decimal, radius: Decimal) -> Model {
    let mut model = Model::new();
    if radius <= Decimal::ZERO {
        tracing::warn!(%radius, "slot corner arcs collapse; omitting them");
        return model;
    }
    let arcs = [
        ([emit(x), emit(-y)], 270.0, 360.0),
        ([emit(-x), emit(-y)], 180.0, 270.0),
        ([emit(-x), emit(y)], 90.0, 180.0),
        ([emit(x), emit(y)], 0.0, 90.0),
    ];
    for (i, (center, start, end)) in arcs.into_iter().enumerate() {
        model.add_path(
            format!("cornerArc{i}"),
            Path::arc(center, emit(radius), start, end),
        );
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rust_decimal_macros::dec;

    fn bbox() -> BoundingBox {
        BoundingBox {
            min_x: dec!(0),
            max_x: dec!(38.1),
            min_y: dec!(0),
            max_y: dec!(19.05),
        }
    }

    fn square() -> Model {
        rectangle(-7.0, 7.0, 7.0, -7.0)
    }

    #[test]
    fn derived_layers_grow_by_half_widths() {
        let layers = derive_pattern_layers(&square(), dec!(0.5), dec!(0.1)).unwrap();
        assert_eq!(layers.top.layer, Some(Layer::Top));
        assert_eq!(layers.bottom_solder_mask.layer, Some(Layer::BottomSolderMask));

        let (_, hi) = layers.bottom.extents().unwrap();
        assert_abs_diff_eq!(hi[0], 7.25, epsilon = 1e-9);
        let (lo, _) = layers.top_solder_mask.extents().unwrap();
        assert_abs_diff_eq!(lo[1], -7.3, epsilon = 1e-9);
    }

    #[test]
    fn derived_layers_follow_the_base_origin() {
        let mut base = square();
        base.move_to([19.05, -9.525]);
        let layers = derive_pattern_layers(&base, dec!(0.5), dec!(0)).unwrap();
        let (lo, hi) = layers.top.extents().unwrap();
        assert_abs_diff_eq!(lo[0], 19.05 - 7.25, epsilon = 1e-9);
        assert_abs_diff_eq!(hi[1], -9.525 + 7.25, epsilon = 1e-9);
    }

    #[test]
    fn insert_uses_layer_names_and_skips_empty() {
        let mut models = IndexMap::new();
        let layers = PatternLayers::mirrored(square(), Model::new());
        layers.insert_into(&mut models, "Slot", "Corner3");
        let names: Vec<&str> = models.keys().map(String::as_str).collect();
        assert_eq!(names, ["SlotTopCorner3", "SlotBottomCorner3"]);
    }

    #[test]
    fn plate_pattern_without_radius_is_plain_inset() {
        let opts = Options {
            plate_pattern_radius: dec!(0),
            ..Options::default()
        };
        let layers = plate_pattern_layers(&bbox(), &opts).unwrap();
        assert_eq!(layers.top.paths.len(), 4);
        let Path::Line { origin, end } = layers.top.paths["lineTop"] else {
            panic!("expected line");
        };
        assert_abs_diff_eq!(origin[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(origin[1], -18.55, epsilon = 1e-12);
        assert_abs_diff_eq!(end[0], 37.6, epsilon = 1e-12);
        let (lo, hi) = layers.top_solder_mask.extents().unwrap();
        assert_abs_diff_eq!(lo[0], 0.5255, epsilon = 1e-9);
        assert_abs_diff_eq!(hi[0], 38.1 - 0.5255, epsilon = 1e-9);
    }

    #[test]
    fn plate_pattern_adds_fillets_and_corner_arcs() {
        let layers = plate_pattern_layers(&bbox(), &Options::default()).unwrap();
        // 4 lines, 4 fillets, 4 arcs.
        assert_eq!(layers.top.paths.len(), 12);
        assert_eq!(layers.bottom_solder_mask.paths.len(), 12);
        let Path::Arc {
            origin,
            radius,
            start_angle,
            end_angle,
        } = layers.top.paths["beautyArc1"]
        else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(origin[0], 37.1, epsilon = 1e-12);
        assert_abs_diff_eq!(origin[1], -18.05, epsilon = 1e-12);
        assert_eq!((radius, start_angle, end_angle), (0.5, 270.0, 360.0));
        let Path::Arc { radius, .. } = layers.top_solder_mask.paths["beautyArc3"] else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(radius, 0.4745, epsilon = 1e-12);
    }

    #[test]
    fn collapsed_plate_corner_arcs_are_omitted() {
        let opts = Options {
            plate_radius: dec!(0.5),
            ..Options::default()
        };
        let layers = plate_pattern_layers(&bbox(), &opts).unwrap();
        assert!(!layers.top.paths.contains_key("beautyArc0"));
        assert_eq!(layers.top.paths.len(), 8);
    }

    #[test]
    fn slot_corners_sit_inside_the_housing() {
        let layers = slot_corner_layers(&Options::default());
        // 7 + 1 - (0.5 + 0.25)
        assert_eq!(
            layers.top.paths["cornerArc0"],
            Path::arc([7.25, -7.25], 0.5, 270.0, 360.0)
        );
        let Path::Arc { radius, .. } = layers.bottom_solder_mask.paths["cornerArc2"] else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(radius, 0.4745, epsilon = 1e-12);
    }

    #[test]
    fn collapsed_slot_mask_arcs_are_omitted() {
        let opts = Options {
            slot_pattern_radius: dec!(0.01),
            ..Options::default()
        };
        let layers = slot_corner_layers(&opts);
        assert_eq!(layers.top.paths.len(), 4);
        assert!(layers.top_solder_mask.is_empty());
    }
}
