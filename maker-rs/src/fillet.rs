use crate::error::GeometryError;
use crate::path::{angle_of, ccw_span, distance, sub};
use crate::{Path, Point};

const MATCH_EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
enum End {
    Origin,
    End,
}

/// Rounds the joint shared by two lines with an arc of `radius`.
///
/// Both lines are trimmed back to the tangent points and the connecting arc is returned. The arc
/// always spans less than a half turn.
pub fn fillet(a: &mut Path, b: &mut Path, radius: f64) -> Result<Path, GeometryError> {
    if radius <= 0.0 {
        return Err(GeometryError::FilletDoesNotFit { radius });
    }
    let (Path::Line { .. }, Path::Line { .. }) = (&*a, &*b) else {
        return Err(GeometryError::UnsupportedFilletPath);
    };

    let (end_a, end_b) = shared_ends(a, b).ok_or(GeometryError::Disconnected)?;
    let corner = point_at(a, end_a);
    let far_a = point_at(a, other(end_a));
    let far_b = point_at(b, other(end_b));

    let len_a = distance(corner, far_a);
    let len_b = distance(corner, far_b);
    if len_a < MATCH_EPS || len_b < MATCH_EPS {
        return Err(GeometryError::Disconnected);
    }
    let u1 = scale(sub(far_a, corner), 1.0 / len_a);
    let u2 = scale(sub(far_b, corner), 1.0 / len_b);

    let dot = u1[0] * u2[0] + u1[1] * u2[1];
    let cross = u1[0] * u2[1] - u1[1] * u2[0];
    if cross.abs() < 1e-12 {
        return Err(GeometryError::ParallelLines);
    }

    let (trim, center) = if dot.abs() < 1e-12 {
        // Right angle: the center sits one radius along each leg.
        (
            radius,
            [
                corner[0] + (u1[0] + u2[0]) * radius,
                corner[1] + (u1[1] + u2[1]) * radius,
            ],
        )
    } else {
        let theta = dot.clamp(-1.0, 1.0).acos();
        let trim = radius / (theta / 2.0).tan();
        let bisector = [u1[0] + u2[0], u1[1] + u2[1]];
        let bisector_len = (bisector[0] * bisector[0] + bisector[1] * bisector[1]).sqrt();
        let reach = (trim * trim + radius * radius).sqrt();
        (
            trim,
            [
                corner[0] + bisector[0] / bisector_len * reach,
                corner[1] + bisector[1] / bisector_len * reach,
            ],
        )
    };

    if trim > len_a + MATCH_EPS || trim > len_b + MATCH_EPS {
        return Err(GeometryError::FilletDoesNotFit { radius });
    }

    let tangent_a = [corner[0] + u1[0] * trim, corner[1] + u1[1] * trim];
    let tangent_b = [corner[0] + u2[0] * trim, corner[1] + u2[1] * trim];
    set_point(a, end_a, tangent_a);
    set_point(b, end_b, tangent_b);

    let angle_a = angle_of(center, tangent_a);
    let angle_b = angle_of(center, tangent_b);
    let arc = if ccw_span(angle_a, angle_b) <= 180.0 {
        Path::arc(center, radius, angle_a, angle_b)
    } else {
        Path::arc(center, radius, angle_b, angle_a)
    };
    Ok(arc)
}

fn shared_ends(a: &Path, b: &Path) -> Option<(End, End)> {
    [
        (End::Origin, End::Origin),
        (End::Origin, End::End),
        (End::End, End::Origin),
        (End::End, End::End),
    ]
    .into_iter()
    .find(|&(ea, eb)| distance(point_at(a, ea), point_at(b, eb)) < MATCH_EPS)
}

fn other(end: End) -> End {
    match end {
        End::Origin => End::End,
        End::End => End::Origin,
    }
}

fn point_at(path: &Path, end: End) -> Point {
    let (o, e) = path.endpoints();
    match end {
        End::Origin => o,
        End::End => e,
    }
}

fn set_point(path: &mut Path, end: End, p: Point) {
    if let Path::Line { origin, end: line_end } = path {
        match end {
            End::Origin => *origin = p,
            End::End => *line_end = p,
        }
    }
}

fn scale(v: Point, k: f64) -> Point {
    [v[0] * k, v[1] * k]
}
