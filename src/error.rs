use std::path::PathBuf;

use plategen_export::ExportError;
use plategen_plate::PlateError;

/// Exit code for a bad command line; clap reports those before a build starts.
pub const EXIT_USAGE: i32 = 1;

/// Why `plategen build` stopped. Layout and options problems are the user's input to fix;
/// the rest happen while producing the plate.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{0:#}")]
    Layout(anyhow::Error),

    #[error("{0:#}")]
    Options(anyhow::Error),

    #[error("cannot build plate: {0}")]
    Geometry(#[from] PlateError),

    #[error("cannot export plate: {0}")]
    Export(#[from] ExportError),

    #[error("cannot serialize plate models: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Layout(_) | BuildError::Options(_) => 2,
            BuildError::Geometry(_)
            | BuildError::Export(_)
            | BuildError::Json(_)
            | BuildError::Write { .. } => 3,
        }
    }
}
