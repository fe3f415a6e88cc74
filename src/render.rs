use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plategen_core::{Key, Options};
use plategen_export::{to_dxf, to_svg, SvgStyle};
use plategen_plate::{build, PlateResult};
use tracing::info;

use crate::error::BuildError;
use crate::{BuildArgs, Format};

pub fn run_build(args: &BuildArgs) -> Result<(), BuildError> {
    let keys = load_layout(&args.layout).map_err(BuildError::Layout)?;
    let options = match &args.options {
        Some(path) => load_options(path).map_err(BuildError::Options)?,
        None => Options::default(),
    };
    info!(keys = keys.len(), "resolved layout");

    let plate = build(&keys, &options)?;
    let written = write_outputs(&plate, args)?;

    for path in &written {
        println!("Wrote {}", path.display());
    }
    println!(
        "Plate {} x {} mm, {} models.",
        plate.bounds.width(),
        plate.bounds.height(),
        plate.models.len()
    );
    Ok(())
}

fn load_layout(path: &Path) -> Result<Vec<Key>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read layout {}", path.display()))?;
    let keys = plategen_parser::resolve(&raw)
        .with_context(|| format!("could not parse layout {}", path.display()))?;
    Ok(keys)
}

fn load_options(path: &Path) -> Result<Options> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read options {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let options = if is_json {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid options in {}", path.display()))?
    } else {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid options in {}", path.display()))?
    };
    Ok(options)
}

fn write_outputs(plate: &PlateResult, args: &BuildArgs) -> Result<Vec<PathBuf>, BuildError> {
    std::fs::create_dir_all(&args.output).map_err(|source| BuildError::Write {
        path: args.output.clone(),
        source,
    })?;

    let model = plate.as_model();
    let mut outputs = Vec::new();
    for format in &args.format {
        let (name, contents) = match format {
            Format::Dxf => ("plate.dxf", to_dxf(&model)?),
            Format::Svg => ("plate.svg", to_svg(&model, SvgStyle::Download)?),
            Format::Json => ("plate.json", serde_json::to_string_pretty(plate)?),
        };
        outputs.push((name, contents));
    }
    if args.preview {
        outputs.push(("preview.svg", to_svg(&model, SvgStyle::Preview)?));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (name, contents) in outputs {
        let path = args.output.join(name);
        if let Err(source) = std::fs::write(&path, contents) {
            return Err(BuildError::Write { path, source });
        }
        info!(path = %path.display(), "wrote output");
        written.push(path);
    }
    Ok(written)
}
