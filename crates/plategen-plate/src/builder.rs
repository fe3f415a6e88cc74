use indexmap::IndexMap;
use maker_rs::{Layer, Model, Point};
use plategen_core::decimal::emit;
use plategen_core::{Decimal, Key, Options};
use serde::Serialize;
use tracing::{debug, info};

use crate::bbox::BoundingBox;
use crate::cutouts::{acoustic_generator, stabilizer_generator, CutoutGenerator};
use crate::pattern::{
    derive_pattern_layers, plate_pattern_layers, slot_corner_layers, PatternLayers,
};
use crate::shapes::{fillet_corners, rectangle};
use crate::slot::extreme_slot;
use crate::switch::switch_aperture;
use crate::PlateError;

/// Every generated model by name, each tagged with its layer, plus the layout bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateResult {
    pub models: IndexMap<String, Model>,
    #[serde(skip)]
    pub bounds: BoundingBox,
}

impl PlateResult {
    /// The whole plate as a single model with one child per entry.
    pub fn as_model(&self) -> Model {
        Model {
            models: self.models.clone(),
            ..Model::default()
        }
    }

    pub fn models_on(&self, layer: Layer) -> impl Iterator<Item = (&String, &Model)> {
        self.models
            .iter()
            .filter(move |(_, m)| m.layer.unwrap_or_default() == layer)
    }
}

/// Builds plate and PCB pattern geometry for `keys`. Pure: the same input always yields the same
/// result.
pub fn build(keys: &[Key], options: &Options) -> Result<PlateResult, PlateError> {
    let assembler = Assembler {
        options,
        stabilizers: stabilizer_generator(options.stabilizer_cutout_type),
        acoustics: acoustic_generator(options.acoustic_cutout_type),
    };

    let mut models = IndexMap::new();
    let mut bounds: Option<BoundingBox> = None;
    for (id, key) in keys.iter().enumerate() {
        let footprint =
            BoundingBox::of_key(key, options).ok_or(PlateError::KeyOutOfRange { key: id })?;
        assembler.place_key(id, key, &mut models)?;
        bounds = Some(bounds.map_or(footprint, |b| b.merge(footprint)));
    }
    let bounds = bounds.ok_or(PlateError::EmptyLayout)?;
    if bounds.max_x.checked_sub(bounds.min_x).is_none()
        || bounds.max_y.checked_sub(bounds.min_y).is_none()
    {
        return Err(PlateError::ExtentOutOfRange);
    }

    models.insert("BoundingBox0".to_string(), plate_outline(&bounds, options)?);
    if options.plate_pattern {
        plate_pattern_layers(&bounds, options)?.insert_into(&mut models, "Plate", "");
    }

    for model in models.values_mut() {
        if model.layer.is_none() {
            model.layer = Some(Layer::Plate);
        }
    }

    info!(
        keys = keys.len(),
        models = models.len(),
        width = %bounds.width(),
        height = %bounds.height(),
        "built plate"
    );
    Ok(PlateResult { models, bounds })
}

struct Assembler<'a> {
    options: &'a Options,
    stabilizers: Box<dyn CutoutGenerator>,
    acoustics: Box<dyn CutoutGenerator>,
}

impl Assembler<'_> {
    fn place_key(
        &self,
        id: usize,
        key: &Key,
        models: &mut IndexMap<String, Model>,
    ) -> Result<(), PlateError> {
        let options = self.options;
        let out_of_range = || PlateError::KeyOutOfRange { key: id };
        let origin = [
            emit(key.center_x().checked_mul(options.unit_width).ok_or_else(out_of_range)?),
            emit(-key.center_y().checked_mul(options.unit_height).ok_or_else(out_of_range)?),
        ];
        let switch_angle = key
            .angle()
            .checked_add(key.independent_switch_angle())
            .map(rotation)
            .ok_or_else(out_of_range)?;
        let stabilizer_angle = key
            .angle()
            .checked_add(key.stabilizer_angle())
            .map(rotation)
            .ok_or_else(out_of_range)?;
        debug!(id, x = origin[0], y = origin[1], switch_angle, "placing key");
        let suffix = id.to_string();

        let mut switch = switch_aperture(key, options)?;
        switch.rotate(switch_angle, [0.0, 0.0]).move_to(origin);
        let patterns = options
            .switch_pattern
            .then(|| {
                derive_pattern_layers(
                    &switch,
                    options.switch_line_width,
                    options.switch_solder_mask_expansion,
                )
            })
            .transpose()?;
        models.insert(format!("Switch{id}"), switch);
        if let Some(layers) = patterns {
            layers.insert_into(models, "Switch", &suffix);
        }

        if let Some(mut stabilizer) = self.stabilizers.generate(key, options)? {
            stabilizer.move_to(origin).rotate(stabilizer_angle, origin);
            let stabilizer = stabilizer.with_layer(Layer::Plate);
            let patterns = options
                .stabilizer_pattern
                .then(|| {
                    derive_pattern_layers(
                        &stabilizer,
                        options.stabilizer_line_width,
                        options.stabilizer_solder_mask_expansion,
                    )
                })
                .transpose()?;
            models.insert(format!("Stabilizer{id}"), stabilizer);
            if let Some(layers) = patterns {
                layers.insert_into(models, "Stabilizer", &suffix);
            }
        }

        if let Some(mut acoustic) = self.acoustics.generate(key, options)? {
            acoustic.move_to(origin).rotate(stabilizer_angle, origin);
            let acoustic = acoustic.with_layer(Layer::Plate);
            let patterns = options
                .acoustic_pattern
                .then(|| {
                    derive_pattern_layers(
                        &acoustic,
                        options.acoustic_line_width,
                        options.acoustic_solder_mask_expansion,
                    )
                })
                .transpose()?;
            models.insert(format!("Acoustic{id}"), acoustic);
            if let Some(layers) = patterns {
                layers.insert_into(models, "Acoustic", &suffix);
            }
        }

        if options.extreme_slot {
            let mut slot = extreme_slot(key, options)?;
            slot.rotate(switch_angle, [0.0, 0.0]).move_to(origin);
            let slot = slot.with_layer(Layer::Plate);
            let patterns = options
                .slot_pattern
                .then(|| {
                    derive_pattern_layers(
                        &slot,
                        options.slot_line_width,
                        options.slot_solder_mask_expansion,
                    )
                })
                .transpose()?;
            models.insert(format!("ExtremeSlot{id}"), slot);
            if let Some(layers) = patterns {
                layers.insert_into(models, "Slot", &suffix);
                if options.slot_pattern_radius > Decimal::ZERO {
                    placed(slot_corner_layers(options), switch_angle, origin).insert_into(
                        models,
                        "Slot",
                        &format!("Corner{id}"),
                    );
                }
            }
        }
        Ok(())
    }
}

/// Key-grid rotation is clockwise; model rotation is counter-clockwise.
fn rotation(angle: Decimal) -> f64 {
    emit(-angle)
}

fn placed(mut layers: PatternLayers, angle: f64, origin: Point) -> PatternLayers {
    for model in [
        &mut layers.top,
        &mut layers.bottom,
        &mut layers.top_solder_mask,
        &mut layers.bottom_solder_mask,
    ] {
        model.rotate(angle, [0.0, 0.0]).move_to(origin);
    }
    layers
}

fn plate_outline(bounds: &BoundingBox, options: &Options) -> Result<Model, PlateError> {
    let mut outline = rectangle(
        emit(bounds.min_x),
        emit(bounds.max_x),
        emit(-bounds.max_y),
        emit(-bounds.min_y),
    );
    if options.plate_radius > Decimal::ZERO {
        fillet_corners(&mut outline, emit(options.plate_radius))?;
    }
    Ok(outline.with_layer(Layer::Plate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use plategen_core::StabilizerCutoutType;
    use rust_decimal_macros::dec;

    fn row(widths: &[Decimal]) -> Vec<Key> {
        let mut x = Decimal::ZERO;
        widths
            .iter()
            .map(|w| {
                let key = Key::builder().x(x).y(dec!(0)).width(*w).build().unwrap();
                x += *w;
                key
            })
            .collect()
    }

    #[test]
    fn empty_layout_is_an_error() {
        assert!(matches!(
            build(&[], &Options::default()),
            Err(PlateError::EmptyLayout)
        ));
    }

    #[test]
    fn switch_sits_at_the_key_center() {
        let result = build(&row(&[dec!(1)]), &Options::default()).unwrap();
        let switch = &result.models["Switch0"];
        let [ox, oy] = switch.origin.unwrap();
        assert_abs_diff_eq!(ox, 9.525, epsilon = 1e-12);
        assert_abs_diff_eq!(oy, -9.525, epsilon = 1e-12);
        let (lo, hi) = switch.extents().unwrap();
        assert_abs_diff_eq!(lo[0] + hi[0], 2.0 * 9.525, epsilon = 1e-9);
        assert_abs_diff_eq!(lo[1] + hi[1], -2.0 * 9.525, epsilon = 1e-9);
    }

    #[test]
    fn spacebar_gets_stabilizer_on_plate_layer() {
        let result = build(&row(&[dec!(6.25)]), &Options::default()).unwrap();
        let stab = &result.models["Stabilizer0"];
        assert_eq!(stab.layer, Some(Layer::Plate));
        assert_eq!(stab.origin, Some([59.53125, -9.525]));
    }

    #[test]
    fn stabilizer_follows_key_rotation() {
        let opts = Options {
            stabilizer_cutout_type: StabilizerCutoutType::AlpsAek,
            ..Options::default()
        };
        let key = Key::builder()
            .x(dec!(0))
            .y(dec!(0))
            .width(dec!(2))
            .angle(dec!(90))
            .rotation_x(dec!(1))
            .rotation_y(dec!(0.5))
            .build()
            .unwrap();
        let result = build(&[key], &opts).unwrap();
        let stab = &result.models["Stabilizer0"];
        // A clockwise quarter turn on the grid moves the holes above and below the center and
        // their offset below the center to its left.
        let (lo, hi) = stab.extents().unwrap();
        let [ox, oy] = stab.origin.unwrap();
        assert_abs_diff_eq!(hi[0] - ox, -3.875, epsilon = 1e-6);
        assert_abs_diff_eq!(lo[0] - ox, -9.085, epsilon = 1e-6);
        assert_abs_diff_eq!(hi[1] - oy, 15.335, epsilon = 1e-6);
        assert_abs_diff_eq!(lo[1] - oy, -15.335, epsilon = 1e-6);
    }

    #[test]
    fn every_model_has_a_layer() {
        let opts = Options {
            switch_pattern: true,
            plate_pattern: true,
            ..Options::default()
        };
        let result = build(&row(&[dec!(1), dec!(2)]), &opts).unwrap();
        assert!(result.models.values().all(|m| m.layer.is_some()));
        assert_eq!(result.models_on(Layer::Top).count(), 3);
        assert_eq!(
            result.models["PlateBottomSolder"].layer,
            Some(Layer::BottomSolderMask)
        );
    }
}
