use maker_rs::Model;
use plategen_core::{Key, Options};
use rust_decimal_macros::dec;

use super::{CutoutGenerator, Profile};
use crate::PlateError;

const MX_BASIC: Profile = Profile {
    width: dec!(2),
    upper: dec!(6),
    lower: dec!(-6),
    spacing: &[(dec!(3), None), (dec!(2), Some(dec!(18.25)))],
};

const MX_EXTREME: Profile = Profile {
    width: dec!(2),
    upper: dec!(7),
    lower: dec!(-7),
    spacing: &[
        (dec!(3), None),
        (dec!(2), Some(dec!(18.25))),
        (dec!(1.5), Some(dec!(10.75))),
    ],
};

/// Relief slots beside 2u keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcousticMxBasic;

/// Relief slots beside keys from 1.5u up to (not including) 3u.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcousticMxExtreme;

impl CutoutGenerator for AcousticMxBasic {
    fn generate(&self, key: &Key, options: &Options) -> Result<Option<Model>, PlateError> {
        MX_BASIC.generate(key, options.acoustic_fillet_radius)
    }
}

impl CutoutGenerator for AcousticMxExtreme {
    fn generate(&self, key: &Key, options: &Options) -> Result<Option<Model>, PlateError> {
        MX_EXTREME.generate(key, options.acoustic_fillet_radius)
    }
}
