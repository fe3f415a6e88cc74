use crate::Point;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("cannot fillet parallel lines")]
    ParallelLines,
    #[error("lines do not share an endpoint")]
    Disconnected,
    #[error("no path named \"{name}\"")]
    MissingPath { name: String },
    #[error("fillet is only supported between two lines")]
    UnsupportedFilletPath,
    #[error("fillet radius {radius} does not fit between the lines")]
    FilletDoesNotFit { radius: f64 },
    #[error("paths do not form closed chains (open end at {at:?})")]
    OpenChain { at: Point },
    #[error("offset by {distance} produced no contour")]
    EmptyOffset { distance: f64 },
}
