use serde::{Deserialize, Serialize};

pub type Point = [f64; 2];

/// A primitive path. Arcs run counter-clockwise from `start_angle` to `end_angle` (degrees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Path {
    Line {
        origin: Point,
        end: Point,
    },
    Arc {
        origin: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl Path {
    #[must_use]
    pub fn line(origin: Point, end: Point) -> Self {
        Path::Line { origin, end }
    }

    #[must_use]
    pub fn arc(origin: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Path::Arc {
            origin,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, Path::Arc { .. })
    }

    /// Start and end points in path direction.
    pub fn endpoints(&self) -> (Point, Point) {
        match *self {
            Path::Line { origin, end } => (origin, end),
            Path::Arc {
                origin,
                radius,
                start_angle,
                end_angle,
            } => (
                point_on_circle(origin, radius, start_angle),
                point_on_circle(origin, radius, end_angle),
            ),
        }
    }

    pub fn length(&self) -> f64 {
        match *self {
            Path::Line { origin, end } => distance(origin, end),
            Path::Arc { radius, .. } => radius * self.arc_span().to_radians(),
        }
    }

    /// Counter-clockwise span in degrees; 0 for lines.
    pub fn arc_span(&self) -> f64 {
        match *self {
            Path::Line { .. } => 0.0,
            Path::Arc {
                start_angle,
                end_angle,
                ..
            } => ccw_span(start_angle, end_angle),
        }
    }

    #[must_use]
    pub fn moved(&self, delta: Point) -> Self {
        match *self {
            Path::Line { origin, end } => Path::Line {
                origin: add(origin, delta),
                end: add(end, delta),
            },
            Path::Arc {
                origin,
                radius,
                start_angle,
                end_angle,
            } => Path::Arc {
                origin: add(origin, delta),
                radius,
                start_angle,
                end_angle,
            },
        }
    }

    pub fn rotate(&mut self, angle_deg: f64, about: Point) {
        match self {
            Path::Line { origin, end } => {
                *origin = rotate_point(*origin, angle_deg, about);
                *end = rotate_point(*end, angle_deg, about);
            }
            Path::Arc {
                origin,
                start_angle,
                end_angle,
                ..
            } => {
                *origin = rotate_point(*origin, angle_deg, about);
                *start_angle += angle_deg;
                *end_angle += angle_deg;
            }
        }
    }
}

pub fn add(a: Point, b: Point) -> Point {
    [a[0] + b[0], a[1] + b[1]]
}

pub fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1]]
}

pub fn distance(a: Point, b: Point) -> f64 {
    let d = sub(a, b);
    (d[0] * d[0] + d[1] * d[1]).sqrt()
}

pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let (s, c) = exact_sin_cos(angle_deg);
    [center[0] + radius * c, center[1] + radius * s]
}

/// Rotates `p` about `about` by `angle_deg` (counter-clockwise).
pub fn rotate_point(p: Point, angle_deg: f64, about: Point) -> Point {
    if angle_deg == 0.0 {
        return p;
    }
    let (s, c) = exact_sin_cos(angle_deg);
    let d = sub(p, about);
    [about[0] + d[0] * c - d[1] * s, about[1] + d[0] * s + d[1] * c]
}

/// `sin`/`cos` that are exact on multiples of 90 degrees, so quarter turns do not drift.
pub fn exact_sin_cos(angle_deg: f64) -> (f64, f64) {
    let norm = normalize_angle(angle_deg);
    if norm == 0.0 {
        (0.0, 1.0)
    } else if norm == 90.0 {
        (1.0, 0.0)
    } else if norm == 180.0 {
        (0.0, -1.0)
    } else if norm == 270.0 {
        (-1.0, 0.0)
    } else {
        norm.to_radians().sin_cos()
    }
}

/// Maps an angle into `[0, 360)`.
pub fn normalize_angle(angle_deg: f64) -> f64 {
    let a = angle_deg % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

pub fn ccw_span(start_deg: f64, end_deg: f64) -> f64 {
    let s = normalize_angle(start_deg);
    let e = normalize_angle(end_deg);
    if e > s {
        e - s
    } else if e < s {
        360.0 - (s - e)
    } else if start_deg != end_deg {
        360.0
    } else {
        0.0
    }
}

/// Direction of `p` seen from `center`, in degrees within `[0, 360)`. Values within `1e-9` of a
/// quarter turn snap to it.
pub fn angle_of(center: Point, p: Point) -> f64 {
    let d = sub(p, center);
    let deg = normalize_angle(d[1].atan2(d[0]).to_degrees());
    let quarter = (deg / 90.0).round() * 90.0;
    if (deg - quarter).abs() < 1e-9 {
        normalize_angle(quarter)
    } else {
        deg
    }
}
