pub mod decimal;
mod error;
mod key;
mod options;

pub use error::{KeyOutOfRange, UnsupportedVariant};
pub use key::Key;
pub use options::{AcousticCutoutType, Options, StabilizerCutoutType};
pub use rust_decimal::Decimal;
