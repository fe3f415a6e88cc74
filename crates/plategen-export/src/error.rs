#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export: the model has no paths")]
    Empty,
    #[error("non-finite value for {what} in {route}")]
    NonFinite { what: &'static str, route: String },
}
