//! Keyboard plate synthesis.
//!
//! [`build`] turns resolved keys into named maker models: switch apertures, stabilizer and
//! acoustic cutouts, optional extreme slots, the plate outline, and the copper and solder-mask
//! pattern layers derived from them.

mod bbox;
mod builder;
pub mod cutouts;
mod error;
pub mod pattern;
mod shapes;
pub mod slot;
pub mod switch;

pub use bbox::BoundingBox;
pub use builder::{build, PlateResult};
pub use error::PlateError;
pub use pattern::{derive_pattern_layers, plate_pattern_layers, slot_corner_layers, PatternLayers};
pub use slot::extreme_slot;
pub use switch::switch_aperture;
