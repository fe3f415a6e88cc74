//! Per-key cutouts placed around the switch aperture: stabilizer wire housings and acoustic
//! relief slots. Each variant is a two-hole pattern described by a [`Profile`].

mod acoustic;
mod null;
mod stabilizer;

use maker_rs::Model;
use plategen_core::decimal::emit;
use plategen_core::{AcousticCutoutType, Decimal, Key, Options, StabilizerCutoutType};

use crate::shapes::{fillet_corners, rectangle};
use crate::PlateError;

pub use acoustic::{AcousticMxBasic, AcousticMxExtreme};
pub use null::NullGenerator;
pub use stabilizer::{
    StabilizerAlpsAek, StabilizerAlpsAt101, StabilizerMxBasic, StabilizerMxSmall, StabilizerMxSpec,
};

pub trait CutoutGenerator {
    /// Cutout for `key` centered on the local origin, or `None` when the key needs none.
    fn generate(&self, key: &Key, options: &Options) -> Result<Option<Model>, PlateError>;
}

pub fn stabilizer_generator(kind: StabilizerCutoutType) -> Box<dyn CutoutGenerator> {
    match kind {
        StabilizerCutoutType::MxBasic => Box::new(StabilizerMxBasic),
        StabilizerCutoutType::MxSmall => Box::new(StabilizerMxSmall),
        StabilizerCutoutType::MxSpec => Box::new(StabilizerMxSpec),
        StabilizerCutoutType::AlpsAek => Box::new(StabilizerAlpsAek),
        StabilizerCutoutType::AlpsAt101 => Box::new(StabilizerAlpsAt101),
        StabilizerCutoutType::None => Box::new(NullGenerator),
    }
}

pub fn acoustic_generator(kind: AcousticCutoutType) -> Box<dyn CutoutGenerator> {
    match kind {
        AcousticCutoutType::None => Box::new(NullGenerator),
        AcousticCutoutType::MxBasic => Box::new(AcousticMxBasic),
        AcousticCutoutType::MxExtreme => Box::new(AcousticMxExtreme),
    }
}

/// Hole geometry (mm) and the key-size table that decides hole spacing.
#[derive(Debug)]
pub(crate) struct Profile {
    pub width: Decimal,
    pub upper: Decimal,
    pub lower: Decimal,
    /// Thresholds in descending key units; the first one the key reaches wins. A `None` spacing
    /// means keys that large get no cutout.
    pub spacing: &'static [(Decimal, Option<Decimal>)],
}

impl Profile {
    pub fn spacing_for(&self, key_size: Decimal) -> Option<Decimal> {
        self.spacing
            .iter()
            .find(|(threshold, _)| key_size >= *threshold)
            .and_then(|(_, spacing)| *spacing)
    }

    /// Two copies of one filleted rectangle at `-spacing` and `+spacing` on x, turned a quarter
    /// clockwise for vertical keys.
    pub fn generate(&self, key: &Key, radius: Decimal) -> Result<Option<Model>, PlateError> {
        let Some(spacing) = self.spacing_for(key.long_axis()) else {
            return Ok(None);
        };

        let half = self.width / Decimal::TWO;
        let mut single = rectangle(emit(-half), emit(half), emit(self.upper), emit(self.lower));
        if radius > Decimal::ZERO {
            fillet_corners(&mut single, emit(radius))?;
        }

        let mut left = single.clone();
        left.move_to([emit(-spacing), 0.0]);
        let mut right = single;
        right.move_to([emit(spacing), 0.0]);

        let mut cutouts = Model::new();
        cutouts.add_model("left", left).add_model("right", right);
        if key.is_vertical() {
            cutouts.rotate(-90.0, [0.0, 0.0]);
        }
        Ok(Some(cutouts))
    }
}
