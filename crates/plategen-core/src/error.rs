use rust_decimal::Decimal;

/// A cutout selector name that matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported {family} variant: {name}")]
pub struct UnsupportedVariant {
    pub family: &'static str,
    pub name: String,
}

/// Key placement whose center falls outside the decimal range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key at ({x}, {y}) has a center outside the representable range")]
pub struct KeyOutOfRange {
    pub x: Decimal,
    pub y: Decimal,
}
