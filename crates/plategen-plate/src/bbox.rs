use plategen_core::{Decimal, Key, Options};
use serde::Serialize;

/// Axis-aligned extent of the layout in millimetres, in the key grid frame (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: Decimal,
    pub max_x: Decimal,
    pub min_y: Decimal,
    pub max_y: Decimal,
}

impl BoundingBox {
    /// Physical footprint of `key`: its size in units scaled around its center. Rotation is
    /// ignored. `None` when the footprint leaves the decimal range.
    pub fn of_key(key: &Key, options: &Options) -> Option<Self> {
        let cx = key.center_x().checked_mul(options.unit_width)?;
        let cy = key.center_y().checked_mul(options.unit_height)?;
        let half_w = key.width().checked_mul(options.unit_width)? / Decimal::TWO;
        let half_h = key.height().checked_mul(options.unit_height)? / Decimal::TWO;
        Some(Self {
            min_x: cx.checked_sub(half_w)?,
            max_x: cx.checked_add(half_w)?,
            min_y: cy.checked_sub(half_h)?,
            max_y: cy.checked_add(half_h)?,
        })
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Union of every box, `None` for an empty iterator.
    pub fn union(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        boxes.into_iter().reduce(Self::merge)
    }

    pub fn width(&self) -> Decimal {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> Decimal {
        self.max_y - self.min_y
    }
}
