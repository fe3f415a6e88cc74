use maker_rs::Model;
use plategen_core::{Decimal, Key, Options};
use rust_decimal_macros::dec;

use super::{CutoutGenerator, Profile};
use crate::PlateError;

const MX_SPACING: &[(Decimal, Option<Decimal>)] = &[
    (dec!(8), Some(dec!(66.675))),
    (dec!(7), Some(dec!(57.15))),
    (dec!(6.25), Some(dec!(50))),
    (dec!(6), Some(dec!(47.625))),
    (dec!(3), Some(dec!(19.05))),
    (dec!(2), Some(dec!(11.938))),
];

const AEK_SPACING: &[(Decimal, Option<Decimal>)] = &[
    (dec!(6.5), Some(dec!(45.3))),
    (dec!(6.25), Some(dec!(41.86))),
    (dec!(2), Some(dec!(14))),
    (dec!(1.75), Some(dec!(12))),
];

const AT101_SPACING: &[(Decimal, Option<Decimal>)] = &[
    (dec!(6.5), Some(dec!(45.3))),
    (dec!(6.25), Some(dec!(41.86))),
    (dec!(2.75), Some(dec!(20.5))),
    (dec!(2), Some(dec!(14))),
    (dec!(1.75), Some(dec!(12))),
];

const MX_BASIC: Profile = Profile {
    width: dec!(7),
    upper: dec!(6),
    lower: dec!(-8),
    spacing: MX_SPACING,
};

/// Tight fit around the stabilizer housing.
const MX_SMALL: Profile = Profile {
    width: dec!(6.75),
    upper: dec!(5.53),
    lower: dec!(-6.77),
    spacing: MX_SPACING,
};

/// Cherry datasheet dimensions.
const MX_SPEC: Profile = Profile {
    width: dec!(6.75),
    upper: dec!(6.77),
    lower: dec!(-7.97),
    spacing: MX_SPACING,
};

const ALPS_AEK: Profile = Profile {
    width: dec!(2.67),
    upper: dec!(-3.875),
    lower: dec!(-9.085),
    spacing: AEK_SPACING,
};

const ALPS_AT101: Profile = Profile {
    width: dec!(2.67),
    upper: dec!(-3.875),
    lower: dec!(-9.085),
    spacing: AT101_SPACING,
};

macro_rules! stabilizer {
    ($(#[$meta:meta])* $name:ident, $profile:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl CutoutGenerator for $name {
            fn generate(&self, key: &Key, options: &Options) -> Result<Option<Model>, PlateError> {
                $profile.generate(key, options.stabilizer_fillet_radius)
            }
        }
    };
}

stabilizer!(
    /// Cherry MX plate-mount stabilizers, generous clearance.
    StabilizerMxBasic,
    MX_BASIC
);
stabilizer!(StabilizerMxSmall, MX_SMALL);
stabilizer!(StabilizerMxSpec, MX_SPEC);
stabilizer!(
    /// Alps stabilizers as used on the Apple Extended Keyboard.
    StabilizerAlpsAek,
    ALPS_AEK
);
stabilizer!(StabilizerAlpsAt101, ALPS_AT101);
