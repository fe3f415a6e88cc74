use maker_rs::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("layout has no keys; nothing to bound")]
    EmptyLayout,

    #[error("key {key} lies outside the representable plate area")]
    KeyOutOfRange { key: usize },

    #[error("plate extent exceeds the representable range")]
    ExtentOutOfRange,
}
