use cavalier_contours::core::math::Vector2;
use cavalier_contours::polyline::{
    seg_arc_radius_and_center, PlineOffsetOptions, PlineOrientation, PlineSource, PlineVertex,
    Polyline,
};

use crate::chain::{find_loops, loop_to_polyline};
use crate::error::GeometryError;
use crate::path::angle_of;
use crate::{Model, Path};

/// Offsets every closed loop of `model` by `distance`, outward unless `inside` is set.
///
/// The result lives in absolute coordinates (no origin) and contains one child model per offset
/// contour, named `chain{n}`, each holding `line{i}`/`arc{i}` paths.
pub fn outline(model: &Model, distance: f64, inside: bool) -> Result<Model, GeometryError> {
    let paths: Vec<Path> = model.walk().into_iter().map(|w| w.path).collect();
    let loops = find_loops(&paths)?;

    let opts = PlineOffsetOptions {
        handle_self_intersects: true,
        ..Default::default()
    };

    let mut out = Model::new();
    if distance == 0.0 {
        for links in &loops {
            let name = format!("chain{}", out.models.len());
            out.add_model(name, polyline_to_model(&loop_to_polyline(links)));
        }
        return Ok(out);
    }

    for links in &loops {
        let pline = loop_to_polyline(links);
        let offset = signed_offset_for(&pline, distance.abs(), inside);
        let contours: Vec<Polyline<f64>> = pline.parallel_offset_opt(offset, &opts);
        for contour in &contours {
            let name = format!("chain{}", out.models.len());
            out.add_model(name, polyline_to_model(contour));
        }
    }

    if out.models.is_empty() && !loops.is_empty() {
        return Err(GeometryError::EmptyOffset { distance });
    }
    tracing::debug!(
        loops = loops.len(),
        contours = out.models.len(),
        distance,
        "outlined model"
    );
    Ok(out)
}

fn signed_offset_for(pline: &Polyline<f64>, abs: f64, inside: bool) -> f64 {
    // Positive offsets move to the left of travel: inward for counter-clockwise loops.
    match pline.orientation() {
        PlineOrientation::Clockwise => {
            if inside {
                -abs
            } else {
                abs
            }
        }
        PlineOrientation::CounterClockwise | PlineOrientation::Open => {
            if inside {
                abs
            } else {
                -abs
            }
        }
    }
}

fn polyline_to_model(pline: &Polyline<f64>) -> Model {
    let mut model = Model::new();
    let count = pline.vertex_count();
    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        if v1.bulge_is_zero() {
            model.add_path(format!("line{i}"), Path::line([v1.x, v1.y], [v2.x, v2.y]));
            continue;
        }
        let (radius, center) = seg_arc_radius_and_center(v1, v2);
        let (start, end) = arc_angles_for_segment(v1, v2, center);
        model.add_path(
            format!("arc{i}"),
            Path::arc([center.x, center.y], radius, start, end),
        );
    }
    model
}

fn arc_angles_for_segment(
    v1: PlineVertex<f64>,
    v2: PlineVertex<f64>,
    center: Vector2<f64>,
) -> (f64, f64) {
    let c = [center.x, center.y];
    let a1 = angle_of(c, [v1.x, v1.y]);
    let a2 = angle_of(c, [v2.x, v2.y]);
    if v1.bulge_is_neg() {
        (a2, a1)
    } else {
        (a1, a2)
    }
}
