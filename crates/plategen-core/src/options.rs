use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnsupportedVariant;

/// Parameters for a plate build. Every field has a default, so partial option files are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub switch_height: Decimal,
    pub switch_width: Decimal,
    pub switch_fillet_radius: Decimal,
    pub switch_dogbone: bool,
    pub switch_pattern: bool,
    pub switch_line_width: Decimal,
    pub switch_solder_mask_expansion: Decimal,

    pub stabilizer_cutout_type: StabilizerCutoutType,
    pub stabilizer_fillet_radius: Decimal,
    pub stabilizer_pattern: bool,
    pub stabilizer_line_width: Decimal,
    pub stabilizer_solder_mask_expansion: Decimal,

    pub acoustic_cutout_type: AcousticCutoutType,
    pub acoustic_fillet_radius: Decimal,
    pub acoustic_pattern: bool,
    pub acoustic_line_width: Decimal,
    pub acoustic_solder_mask_expansion: Decimal,

    pub extreme_slot: bool,
    pub slot_width: Decimal,
    pub switch_housing_width: Decimal,
    pub connector_width: Decimal,
    pub slot_pattern: bool,
    pub slot_line_width: Decimal,
    pub slot_solder_mask_expansion: Decimal,
    pub slot_pattern_radius: Decimal,

    pub plate_radius: Decimal,
    pub plate_pattern: bool,
    pub plate_line_width: Decimal,
    pub plate_solder_mask_expansion: Decimal,
    pub plate_pattern_radius: Decimal,

    pub unit_width: Decimal,
    pub unit_height: Decimal,
}

impl Default for Options {
    fn default() -> Self {
        let half = Decimal::new(5, 1);
        let mask = Decimal::new(51, 3);
        Self {
            switch_height: Decimal::from(14),
            switch_width: Decimal::from(14),
            switch_fillet_radius: half,
            switch_dogbone: true,
            switch_pattern: false,
            switch_line_width: half,
            switch_solder_mask_expansion: mask,

            stabilizer_cutout_type: StabilizerCutoutType::MxBasic,
            stabilizer_fillet_radius: half,
            stabilizer_pattern: false,
            stabilizer_line_width: half,
            stabilizer_solder_mask_expansion: mask,

            acoustic_cutout_type: AcousticCutoutType::None,
            acoustic_fillet_radius: half,
            acoustic_pattern: false,
            acoustic_line_width: half,
            acoustic_solder_mask_expansion: mask,

            extreme_slot: false,
            slot_width: Decimal::ONE,
            switch_housing_width: Decimal::ONE,
            connector_width: Decimal::new(12, 1),
            slot_pattern: false,
            slot_line_width: half,
            slot_solder_mask_expansion: mask,
            slot_pattern_radius: Decimal::new(25, 2),

            plate_radius: Decimal::ONE,
            plate_pattern: false,
            plate_line_width: Decimal::ONE,
            plate_solder_mask_expansion: mask,
            plate_pattern_radius: half,

            unit_width: Decimal::new(1905, 2),
            unit_height: Decimal::new(1905, 2),
        }
    }
}

macro_rules! variant_enum {
    ($(#[$meta:meta])* $name:ident, $family:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case", try_from = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnsupportedVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnsupportedVariant {
                        family: $family,
                        name: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnsupportedVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

variant_enum!(
    /// Stabilizer cutout shape.
    StabilizerCutoutType, "stabilizer", {
        MxBasic => "mx-basic",
        MxSmall => "mx-small",
        MxSpec => "mx-spec",
        AlpsAek => "alps-aek",
        AlpsAt101 => "alps-at101",
        None => "none",
    }
);

variant_enum!(
    /// Acoustic relief cutout shape.
    AcousticCutoutType, "acoustic", {
        None => "none",
        MxBasic => "mx-basic",
        MxExtreme => "mx-extreme",
    }
);
