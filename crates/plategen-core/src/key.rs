use bon::bon;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::rotate_about;
use crate::error::KeyOutOfRange;

/// A resolved key: grid placement in key units plus per-key cutout tweaks.
///
/// Immutable once built; the rotated center is computed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    x: Decimal,
    y: Decimal,
    width: Decimal,
    height: Decimal,
    width2: Option<Decimal>,
    height2: Option<Decimal>,
    angle: Decimal,
    rotation_x: Decimal,
    rotation_y: Decimal,
    independent_switch_angle: Decimal,
    stabilizer_angle: Decimal,
    shift_6u_stabilizers: bool,
    skip_orientation_fix: bool,
    center_x: Decimal,
    center_y: Decimal,
}

#[bon]
impl Key {
    /// Fails when the rotated center cannot be represented.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: Decimal,
        y: Decimal,
        #[builder(default = Decimal::ONE)] width: Decimal,
        #[builder(default = Decimal::ONE)] height: Decimal,
        width2: Option<Decimal>,
        height2: Option<Decimal>,
        #[builder(default)] angle: Decimal,
        #[builder(default)] rotation_x: Decimal,
        #[builder(default)] rotation_y: Decimal,
        #[builder(default)] independent_switch_angle: Decimal,
        #[builder(default)] stabilizer_angle: Decimal,
        #[builder(default)] shift_6u_stabilizers: bool,
        #[builder(default)] skip_orientation_fix: bool,
    ) -> Result<Self, KeyOutOfRange> {
        let two = Decimal::TWO;
        let unrotated = x
            .checked_add(width / two)
            .zip(y.checked_add(height / two));
        let (center_x, center_y) = unrotated
            .and_then(|c| rotate_about(c, angle, (rotation_x, rotation_y)))
            .ok_or(KeyOutOfRange { x, y })?;
        Ok(Self {
            x,
            y,
            width,
            height,
            width2,
            height2,
            angle,
            rotation_x,
            rotation_y,
            independent_switch_angle,
            stabilizer_angle,
            shift_6u_stabilizers,
            skip_orientation_fix,
            center_x,
            center_y,
        })
    }
}

impl Key {
    /// Left edge in key units, before rotation.
    pub fn x(&self) -> Decimal {
        self.x
    }

    /// Top edge in key units, before rotation.
    pub fn y(&self) -> Decimal {
        self.y
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    pub fn height(&self) -> Decimal {
        self.height
    }

    pub fn width2(&self) -> Option<Decimal> {
        self.width2
    }

    pub fn height2(&self) -> Option<Decimal> {
        self.height2
    }

    /// Cluster rotation in degrees, clockwise on the key grid.
    pub fn angle(&self) -> Decimal {
        self.angle
    }

    pub fn rotation_x(&self) -> Decimal {
        self.rotation_x
    }

    pub fn rotation_y(&self) -> Decimal {
        self.rotation_y
    }

    pub fn independent_switch_angle(&self) -> Decimal {
        self.independent_switch_angle
    }

    pub fn stabilizer_angle(&self) -> Decimal {
        self.stabilizer_angle
    }

    pub fn shift_6u_stabilizers(&self) -> bool {
        self.shift_6u_stabilizers
    }

    pub fn skip_orientation_fix(&self) -> bool {
        self.skip_orientation_fix
    }

    pub fn center_x(&self) -> Decimal {
        self.center_x
    }

    pub fn center_y(&self) -> Decimal {
        self.center_y
    }

    /// Whether cutouts should be turned a quarter so their long axis follows the key height.
    pub fn is_vertical(&self) -> bool {
        !self.skip_orientation_fix && self.height > self.width
    }

    /// Key size used for stabilizer and acoustic table lookups.
    pub fn long_axis(&self) -> Decimal {
        if self.is_vertical() {
            self.height
        } else {
            self.width
        }
    }
}
