use maker_rs::path::point_on_circle;
use maker_rs::{Layer, Model, Path, Point, WalkedPath};

use crate::format::{finite, fmt_num};
use crate::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgStyle {
    /// White strokes for a dark background, scaled to fit the container.
    Preview,
    /// Black strokes at true size in millimetres.
    Download,
}

/// Renders `model` with the y axis flipped into SVG space. Each layer gets its own `<path>`,
/// in the fixed layer order.
pub fn to_svg(model: &Model, style: SvgStyle) -> Result<String, ExportError> {
    let walked = model.walk();
    let Some((lo, hi)) = model.extents() else {
        return Err(ExportError::Empty);
    };
    let width = hi[0] - lo[0];
    let height = hi[1] - lo[1];
    let transform = |p: Point| [p[0] - lo[0], hi[1] - p[1]];

    let mut body = String::new();
    for layer in Layer::ALL {
        let mut d = String::new();
        for w in walked.iter().filter(|w| w.layer == layer) {
            push_subpath(&mut d, &path_data(w, transform)?);
        }
        if d.is_empty() {
            continue;
        }
        body.push_str(&format!(
            "<path id=\"{}\" d=\"{d}\" vector-effect=\"non-scaling-stroke\"/>",
            layer.name()
        ));
    }

    let (w, h) = (fmt_num(width), fmt_num(height));
    let svg = match style {
        SvgStyle::Preview => format!(
            "<svg width=\"100%\" height=\"100%\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svgGroup\" stroke-linecap=\"round\" fill-rule=\"evenodd\" stroke=\"#fff\" stroke-width=\"0.5mm\" fill=\"none\" style=\"stroke:#fff;stroke-width:0.5mm;fill:none\">{body}</g></svg>"
        ),
        SvgStyle::Download => format!(
            "<svg width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svgGroup\" stroke-linecap=\"round\" fill-rule=\"evenodd\" stroke=\"#000\" stroke-width=\"0.25mm\" fill=\"none\" style=\"stroke:#000;stroke-width:0.25mm;fill:none\">{body}</g></svg>"
        ),
    };
    tracing::debug!(?style, paths = walked.len(), "wrote svg");
    Ok(svg)
}

fn push_subpath(d: &mut String, sub: &str) {
    if sub.is_empty() {
        return;
    }
    if !d.is_empty() {
        d.push(' ');
    }
    d.push_str(sub);
}

fn path_data(w: &WalkedPath, transform: impl Fn(Point) -> Point) -> Result<String, ExportError> {
    match w.path {
        Path::Line { origin, end } => {
            let a = transform([finite(origin[0], "line x1", w)?, finite(origin[1], "line y1", w)?]);
            let b = transform([finite(end[0], "line x2", w)?, finite(end[1], "line y2", w)?]);
            Ok(format!(
                "M {} {} L {} {}",
                fmt_num(a[0]),
                fmt_num(a[1]),
                fmt_num(b[0]),
                fmt_num(b[1])
            ))
        }
        Path::Arc {
            origin,
            radius,
            start_angle,
            ..
        } => {
            finite(origin[0], "arc cx", w)?;
            finite(origin[1], "arc cy", w)?;
            let r = finite(radius, "arc r", w)?.abs();
            let span = w.path.arc_span();
            let start = transform(point_on_circle(origin, radius, start_angle));
            // Y-axis flip turns CCW into CW, hence sweep flag 0.
            if span >= 360.0 {
                let mid = transform(point_on_circle(origin, radius, start_angle + 180.0));
                return Ok(format!(
                    "M {sx} {sy} A {r} {r} 0 0 0 {mx} {my} A {r} {r} 0 0 0 {sx} {sy}",
                    sx = fmt_num(start[0]),
                    sy = fmt_num(start[1]),
                    mx = fmt_num(mid[0]),
                    my = fmt_num(mid[1]),
                    r = fmt_num(r),
                ));
            }
            let end = transform(w.path.endpoints().1);
            let large = if span > 180.0 { 1 } else { 0 };
            Ok(format!(
                "M {} {} A {r} {r} 0 {large} 0 {} {}",
                fmt_num(start[0]),
                fmt_num(start[1]),
                fmt_num(end[0]),
                fmt_num(end[1]),
                r = fmt_num(r),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_path<'a>(svg: &'a str, id: &str) -> Option<&'a str> {
        let needle = format!("<path id=\"{id}\" d=\"");
        let start = svg.find(&needle)? + needle.len();
        let rest = &svg[start..];
        Some(&rest[..rest.find('"')?])
    }

    #[test]
    fn lines_are_flipped_into_svg_space() {
        let mut m = Model::new();
        m.add_path("a", Path::line([0.0, 0.0], [10.0, 5.0]));
        let svg = to_svg(&m, SvgStyle::Download).unwrap();
        assert_eq!(extract_path(&svg, "plate"), Some("M 0 5 L 10 0"));
        assert!(svg.starts_with("<svg width=\"10mm\" height=\"5mm\" viewBox=\"0 0 10 5\""));
    }

    #[test]
    fn quarter_arc_uses_small_clockwise_sweep() {
        let mut m = Model::new();
        m.add_path("a", Path::arc([0.0, 0.0], 1.0, 0.0, 90.0));
        let svg = to_svg(&m, SvgStyle::Preview).unwrap();
        // Extents span x 0..1, y 0..1: start (1, 0) -> (1, 1), end (0, 1) -> (0, 0).
        assert_eq!(extract_path(&svg, "plate"), Some("M 1 1 A 1 1 0 0 0 0 0"));
        assert!(svg.contains("stroke=\"#fff\""));
        assert!(svg.contains("width=\"100%\""));
    }

    #[test]
    fn layers_get_separate_paths() {
        let mut copper = Model::new();
        copper.add_path("a", Path::line([0.0, 0.0], [1.0, 0.0]));
        let mut plate = Model::new();
        plate.add_path("b", Path::line([0.0, 1.0], [1.0, 1.0]));
        let mut m = Model::new();
        m.add_model("copper", copper.with_layer(Layer::Bottom))
            .add_model("plate", plate);
        let svg = to_svg(&m, SvgStyle::Download).unwrap();
        assert!(extract_path(&svg, "plate").is_some());
        assert!(extract_path(&svg, "bottom").is_some());
        assert!(extract_path(&svg, "top").is_none());
        assert!(svg.find("id=\"plate\"").unwrap() < svg.find("id=\"bottom\"").unwrap());
    }

    #[test]
    fn empty_model_is_an_error() {
        assert!(matches!(
            to_svg(&Model::new(), SvgStyle::Preview),
            Err(ExportError::Empty)
        ));
    }
}
