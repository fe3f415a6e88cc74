mod error;
mod kle;

pub use error::Error;
pub use kle::{resolve, resolve_value};
