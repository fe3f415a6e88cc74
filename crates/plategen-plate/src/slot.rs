use maker_rs::{Model, Path, Point};
use plategen_core::decimal::emit;
use plategen_core::{Decimal, Key, Options};

use crate::PlateError;

const CORNER_SIGNS: [(i64, i64); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// The "extreme slot": four L-shaped slots hugging the switch housing, one per aperture corner,
/// separated by connector bridges on both axes. Centered on the local origin.
///
/// When the fillet radius is exactly half the slot width, the slot ends are closed by
/// semicircles instead of two filleted corners each. The shape does not depend on the key; the
/// caller places and rotates it.
pub fn extreme_slot(key: &Key, options: &Options) -> Result<Model, PlateError> {
    let slot = Slot::new(options);
    let mut model = Model::new();
    let mut lines = 1usize;
    let mut fillets = 1usize;

    for (corner, (xs, ys)) in CORNER_SIGNS.into_iter().enumerate() {
        let (xs, ys) = (Decimal::from(xs), Decimal::from(ys));
        if slot.is_half_round() {
            slot.half_round_corner(&mut model, corner, xs, ys, &mut lines, &mut fillets)?;
        } else {
            slot.filleted_corner(&mut model, xs, ys, &mut lines, &mut fillets)?;
        }
    }

    tracing::trace!(
        x = %key.center_x(),
        y = %key.center_y(),
        paths = model.paths.len(),
        "extreme slot"
    );
    Ok(model)
}

struct Slot {
    half_width: Decimal,
    half_height: Decimal,
    housing: Decimal,
    width: Decimal,
    half_connector: Decimal,
    radius: Decimal,
}

impl Slot {
    fn new(options: &Options) -> Self {
        Self {
            half_width: options.switch_width / Decimal::TWO,
            half_height: options.switch_height / Decimal::TWO,
            housing: options.switch_housing_width,
            width: options.slot_width,
            half_connector: options.connector_width / Decimal::TWO,
            radius: options.acoustic_fillet_radius,
        }
    }

    fn is_half_round(&self) -> bool {
        self.radius == self.width / Decimal::TWO
    }

    /// Housing corner, `p1`.
    fn inner_x(&self) -> Decimal {
        self.half_width + self.housing
    }

    fn inner_y(&self) -> Decimal {
        self.half_height + self.housing
    }

    /// Six-point outline with `connector` as the bridge-side coordinate.
    fn outline(&self, connector: Decimal, xs: Decimal, ys: Decimal) -> [Point; 6] {
        let ix = self.inner_x();
        let iy = self.inner_y();
        let ox = ix + self.width;
        let oy = iy + self.width;
        let p = |x: Decimal, y: Decimal| [emit(xs * x), emit(ys * y)];
        [
            p(ix, iy),
            p(connector, iy),
            p(connector, oy),
            p(ox, oy),
            p(ox, connector),
            p(ix, connector),
        ]
    }

    fn filleted_corner(
        &self,
        model: &mut Model,
        xs: Decimal,
        ys: Decimal,
        lines: &mut usize,
        fillets: &mut usize,
    ) -> Result<(), PlateError> {
        let points = self.outline(self.half_connector, xs, ys);
        let mut names = Vec::with_capacity(6);
        for i in 0..6 {
            let name = format!("line{}", *lines);
            model.add_path(name.clone(), Path::line(points[i], points[(i + 1) % 6]));
            names.push(name);
            *lines += 1;
        }

        if self.radius > Decimal::ZERO {
            for i in 0..6 {
                let arc = model.fillet_paths(&names[(i + 5) % 6], &names[i], emit(self.radius))?;
                model.add_path(format!("fillet{}", *fillets), arc);
                *fillets += 1;
            }
        }
        Ok(())
    }

    fn half_round_corner(
        &self,
        model: &mut Model,
        corner: usize,
        xs: Decimal,
        ys: Decimal,
        lines: &mut usize,
        fillets: &mut usize,
    ) -> Result<(), PlateError> {
        let r = self.radius;
        let bridge = self.half_connector + r;
        let points = self.outline(bridge, xs, ys);

        // p2-p3 and p5-p6 are left open for the semicircles.
        let mut names = Vec::with_capacity(4);
        for (a, b) in [(0, 1), (2, 3), (3, 4), (5, 0)] {
            let name = format!("line{}", *lines);
            model.add_path(name.clone(), Path::line(points[a], points[b]));
            names.push(name);
            *lines += 1;
        }

        let (start1, end1) = if xs.is_sign_positive() {
            (90.0, 270.0)
        } else {
            (270.0, 90.0)
        };
        model.add_path(
            format!("semicircle1_{corner}"),
            Path::arc(
                [emit(xs * bridge), emit(ys * (self.inner_y() + r))],
                emit(r),
                start1,
                end1,
            ),
        );
        let (start2, end2) = if ys.is_sign_positive() {
            (180.0, 0.0)
        } else {
            (0.0, 180.0)
        };
        model.add_path(
            format!("semicircle2_{corner}"),
            Path::arc(
                [emit(xs * (self.inner_x() + r)), emit(ys * bridge)],
                emit(r),
                start2,
                end2,
            ),
        );

        if r > Decimal::ZERO {
            // Joints at p4 and p1; the other neighbours meet through a semicircle.
            for (a, b) in [(1, 2), (3, 0)] {
                let arc = model.fillet_paths(&names[a], &names[b], emit(r))?;
                model.add_path(format!("fillet{}", *fillets), arc);
                *fillets += 1;
            }
        }
        Ok(())
    }
}
