//! Writers for layered plate models: DXF in millimetres with one DXF layer per PCB layer, and SVG
//! for previews and downloads.

pub mod dxf;
mod error;
mod format;
pub mod svg;

pub use dxf::to_dxf;
pub use error::ExportError;
pub use svg::{to_svg, SvgStyle};
