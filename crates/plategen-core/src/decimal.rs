use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Parses a decimal from its textual form, accepting scientific notation.
pub fn parse(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Converts to `f64` at the point where a coordinate leaves decimal arithmetic.
pub fn emit(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

pub fn degrees_to_radians(deg: Decimal) -> Decimal {
    deg / Decimal::from(180) * Decimal::PI
}

/// Rotates `(x, y)` about `(ox, oy)` counter-clockwise by `angle_deg`.
///
/// A zero angle returns the input untouched, with no trigonometric rounding. `None` when an
/// intermediate value leaves the decimal range.
pub fn rotate_about(
    (x, y): (Decimal, Decimal),
    angle_deg: Decimal,
    (ox, oy): (Decimal, Decimal),
) -> Option<(Decimal, Decimal)> {
    if angle_deg.is_zero() {
        return Some((x, y));
    }
    let rad = degrees_to_radians(angle_deg);
    let (sin, cos) = (rad.sin(), rad.cos());
    let tx = x.checked_sub(ox)?;
    let ty = y.checked_sub(oy)?;
    let rx = tx
        .checked_mul(cos)?
        .checked_sub(ty.checked_mul(sin)?)?
        .checked_add(ox)?;
    let ry = tx
        .checked_mul(sin)?
        .checked_add(ty.checked_mul(cos)?)?
        .checked_add(oy)?;
    Some((rx, ry))
}
