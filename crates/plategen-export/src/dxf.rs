use maker_rs::{Layer, Model, Path, WalkedPath};

use crate::format::{finite, fmt_num};
use crate::ExportError;

/// AutoCAD color index for each layer.
pub fn layer_color(layer: Layer) -> u8 {
    match layer {
        Layer::Plate => 6,
        Layer::Top => 1,
        Layer::Bottom => 5,
        Layer::TopSolderMask => 2,
        Layer::BottomSolderMask => 3,
    }
}

/// Writes every path of `model` as a LINE or ARC entity on its effective layer.
///
/// The LAYER table always declares all five layers so that empty ones still show up in CAD
/// tools with their colors.
pub fn to_dxf(model: &Model) -> Result<String, ExportError> {
    let walked = model.walk();
    if walked.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut out = String::new();
    push_pair(&mut out, 0, "SECTION");
    push_pair(&mut out, 2, "HEADER");
    push_pair(&mut out, 9, "$INSUNITS");
    push_pair(&mut out, 70, "4"); // millimeters
    push_pair(&mut out, 0, "ENDSEC");

    push_pair(&mut out, 0, "SECTION");
    push_pair(&mut out, 2, "TABLES");
    push_pair(&mut out, 0, "TABLE");
    push_pair(&mut out, 2, "LTYPE");
    push_pair(&mut out, 0, "LTYPE");
    push_pair(&mut out, 72, "65");
    push_pair(&mut out, 70, "64");
    push_pair(&mut out, 2, "CONTINUOUS");
    push_pair(&mut out, 3, "______");
    push_pair(&mut out, 73, "0");
    push_pair(&mut out, 40, "0");
    push_pair(&mut out, 0, "ENDTAB");
    push_pair(&mut out, 0, "TABLE");
    push_pair(&mut out, 2, "LAYER");
    push_pair(&mut out, 70, Layer::ALL.len().to_string());
    for layer in Layer::ALL {
        push_pair(&mut out, 0, "LAYER");
        push_pair(&mut out, 2, layer.name());
        push_pair(&mut out, 70, "0");
        push_pair(&mut out, 62, layer_color(layer).to_string());
        push_pair(&mut out, 6, "CONTINUOUS");
    }
    push_pair(&mut out, 0, "ENDTAB");
    push_pair(&mut out, 0, "ENDSEC");

    push_pair(&mut out, 0, "SECTION");
    push_pair(&mut out, 2, "ENTITIES");
    for w in &walked {
        push_entity(&mut out, w)?;
    }
    push_pair(&mut out, 0, "ENDSEC");
    push_pair(&mut out, 0, "EOF");

    tracing::debug!(entities = walked.len(), bytes = out.len(), "wrote dxf");
    Ok(out)
}

fn push_entity(out: &mut String, w: &WalkedPath) -> Result<(), ExportError> {
    match w.path {
        Path::Line { origin, end } => {
            push_pair(out, 0, "LINE");
            push_pair(out, 8, w.layer.name());
            push_pair_f64(out, 10, finite(origin[0], "line x1", w)?);
            push_pair_f64(out, 20, finite(origin[1], "line y1", w)?);
            push_pair_f64(out, 11, finite(end[0], "line x2", w)?);
            push_pair_f64(out, 21, finite(end[1], "line y2", w)?);
        }
        Path::Arc {
            origin,
            radius,
            start_angle,
            end_angle,
        } => {
            push_pair(out, 0, "ARC");
            push_pair(out, 8, w.layer.name());
            push_pair_f64(out, 10, finite(origin[0], "arc cx", w)?);
            push_pair_f64(out, 20, finite(origin[1], "arc cy", w)?);
            push_pair_f64(out, 40, finite(radius, "arc r", w)?);
            push_pair_f64(out, 50, finite(start_angle, "arc start", w)?);
            push_pair_f64(out, 51, finite(end_angle, "arc end", w)?);
        }
    }
    Ok(())
}

fn push_pair(out: &mut String, code: i32, value: impl AsRef<str>) {
    out.push_str(&code.to_string());
    out.push('\n');
    out.push_str(value.as_ref());
    out.push('\n');
}

fn push_pair_f64(out: &mut String, code: i32, value: f64) {
    push_pair(out, code, fmt_num(value));
}
