use maker_rs::{GeometryError, Model, Path};

const CORNERS: [(&str, &str, &str); 4] = [
    ("filletTopLeft", "lineTop", "lineLeft"),
    ("filletTopRight", "lineTop", "lineRight"),
    ("filletBottomLeft", "lineBottom", "lineLeft"),
    ("filletBottomRight", "lineBottom", "lineRight"),
];

/// Axis-aligned rectangle as four named lines. `upper_y` is the y of the `lineTop` edge.
pub(crate) fn rectangle(left: f64, right: f64, upper_y: f64, lower_y: f64) -> Model {
    let upper_left = [left, upper_y];
    let upper_right = [right, upper_y];
    let lower_left = [left, lower_y];
    let lower_right = [right, lower_y];

    let mut model = Model::new();
    model
        .add_path("lineTop", Path::line(upper_left, upper_right))
        .add_path("lineBottom", Path::line(lower_left, lower_right))
        .add_path("lineLeft", Path::line(upper_left, lower_left))
        .add_path("lineRight", Path::line(upper_right, lower_right));
    model
}

/// Rounds the four corners of a [`rectangle`].
pub(crate) fn fillet_corners(model: &mut Model, radius: f64) -> Result<(), GeometryError> {
    for (name, a, b) in CORNERS {
        let arc = model.fillet_paths(a, b, radius)?;
        model.add_path(name, arc);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rectangle_closes() {
        let mut m = rectangle(-1.0, 1.0, 2.0, -2.0);
        fillet_corners(&mut m, 0.5).unwrap();
        assert_eq!(m.paths.len(), 8);
        let walked: Vec<Path> = m.walk().into_iter().map(|w| w.path).collect();
        let loops = maker_rs::chain::find_loops(&walked).unwrap();
        assert_eq!(loops.len(), 1);
    }
}
