//! A small geometric model kernel in the spirit of maker.js.
//!
//! Models are trees of named lines and arcs with an optional origin and layer. They can be
//! rotated and moved, have line-line joints filleted, and be outlined (offset) into new closed
//! contours.

pub mod chain;
mod error;
pub mod fillet;
mod model;
pub mod outline;
pub mod path;

pub use error::GeometryError;
pub use fillet::fillet;
pub use model::{Layer, Model, WalkedPath};
pub use outline::outline;
pub use path::{Path, Point};
