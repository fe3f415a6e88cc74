use maker_rs::{GeometryError, Model, Path};
use plategen_core::decimal::emit;
use plategen_core::{Decimal, Key, Options};
use rust_decimal::MathematicalOps;

use crate::shapes::{fillet_corners, rectangle};
use crate::PlateError;

/// The switch aperture centered on the local origin.
///
/// A zero fillet radius gives sharp corners; otherwise the corners are rounded, or built with the
/// dogbone relief construction when `switch_dogbone` is set.
pub fn switch_aperture(key: &Key, options: &Options) -> Result<Model, PlateError> {
    let half_width = options.switch_width / Decimal::TWO;
    let half_height = options.switch_height / Decimal::TWO;
    let radius = options.switch_fillet_radius;

    let mut model = if radius <= Decimal::ZERO {
        rectangle(
            emit(-half_width),
            emit(half_width),
            emit(half_height),
            emit(-half_height),
        )
    } else if !options.switch_dogbone {
        let mut m = rectangle(
            emit(-half_width),
            emit(half_width),
            emit(half_height),
            emit(-half_height),
        );
        fillet_corners(&mut m, emit(radius))?;
        m
    } else {
        dogbone(half_width, half_height, radius)?
    };

    if key.is_vertical() {
        model.rotate(-90.0, [0.0, 0.0]);
    }
    Ok(model)
}

/// Each corner is a `2r` arc centered `r/sqrt(2) + r` inside both edges, joined to the shortened
/// edges by `4r` arcs centered outside the aperture.
fn dogbone(hw: Decimal, hh: Decimal, r: Decimal) -> Result<Model, GeometryError> {
    let not_drawable = || GeometryError::FilletDoesNotFit { radius: emit(r) };
    let two = Decimal::TWO;
    let four = Decimal::from(4);
    let six = Decimal::from(6);

    let big_radius = r * two;
    let sqrt2 = two.sqrt().ok_or_else(not_drawable)?;
    let shrink = r / sqrt2 + r;
    let shrink2 = ((six * r).powi(2) - (four * r + shrink).powi(2))
        .sqrt()
        .ok_or_else(not_drawable)?;
    let theta = (emit(shrink2) / emit(six * r)).asin().to_degrees();

    let mut model = Model::new();

    let corner_centers = [
        (-hw + shrink, hh - shrink),
        (hw - shrink, hh - shrink),
        (-hw + shrink, -hh + shrink),
        (hw - shrink, -hh + shrink),
    ];
    let corner_angles = [
        (90.0 - theta, 180.0 + theta),
        (360.0 - theta, 90.0 + theta),
        (180.0 - theta, 270.0 + theta),
        (270.0 - theta, 360.0 + theta),
    ];
    let corners = corner_centers.into_iter().zip(corner_angles);
    for (i, ((cx, cy), (start, end))) in corners.enumerate() {
        model.add_path(
            format!("bigCornerArc{i}"),
            Path::arc([emit(cx), emit(cy)], emit(big_radius), start, end),
        );
    }

    let inset = shrink + shrink2;
    let x_offset = hw + four * r;
    let y_offset = hh + four * r;
    let relief_centers = [
        (-hw + inset, y_offset),
        (hw - inset, y_offset),
        (-hw + inset, -y_offset),
        (hw - inset, -y_offset),
        (-x_offset, hh - inset),
        (-x_offset, -hh + inset),
        (x_offset, hh - inset),
        (x_offset, -hh + inset),
    ];
    let relief_angles = [
        (270.0 - theta, 270.0),
        (270.0, 270.0 + theta),
        (90.0, 90.0 + theta),
        (90.0 - theta, 90.0),
        (0.0, theta),
        (360.0 - theta, 0.0),
        (180.0 - theta, 180.0),
        (180.0, 180.0 + theta),
    ];
    let reliefs = relief_centers.into_iter().zip(relief_angles);
    for (i, ((cx, cy), (start, end))) in reliefs.enumerate() {
        model.add_path(
            format!("extraArc{i}"),
            Path::arc([emit(cx), emit(cy)], emit(four * r), start, end),
        );
    }

    let top = emit(hh);
    let bottom = emit(-hh);
    let left = emit(-hw);
    let right = emit(hw);
    model
        .add_path(
            "lineTop",
            Path::line([emit(-hw + inset), top], [emit(hw - inset), top]),
        )
        .add_path(
            "lineBottom",
            Path::line([emit(-hw + inset), bottom], [emit(hw - inset), bottom]),
        )
        .add_path(
            "lineLeft",
            Path::line([left, emit(hh - inset)], [left, emit(-hh + inset)]),
        )
        .add_path(
            "lineRight",
            Path::line([right, emit(hh - inset)], [right, emit(-hh + inset)]),
        );
    Ok(model)
}
