use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse layout: {0}")]
    Syntax(String),

    #[error("layout root must be an array")]
    RootNotArray,

    #[error("row {row} must be an array")]
    RowNotArray { row: usize },

    #[error("row {row}, item {item}: expected a modifier object or a key label, found {found}")]
    InvalidElement {
        row: usize,
        item: usize,
        found: &'static str,
    },

    #[error("row {row}: invalid value for \"{field}\": {value}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}, item {item}: key position leaves the representable range")]
    OutOfRange { row: usize, item: usize },
}
