use maker_rs::Model;
use plategen_core::{Key, Options};

use super::CutoutGenerator;
use crate::PlateError;

/// Generates nothing; selected by `none`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl CutoutGenerator for NullGenerator {
    fn generate(&self, _key: &Key, _options: &Options) -> Result<Option<Model>, PlateError> {
        Ok(None)
    }
}
