use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod error;
mod render;

use error::EXIT_USAGE;

#[derive(Parser)]
#[command(name = "plategen", version, about = "Keyboard plate and PCB pattern generator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build plate and pattern outputs from a keyboard-layout-editor layout
    Build(BuildArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Layout file: KLE raw data or the JSON array download
    #[arg(value_name = "LAYOUT")]
    pub layout: PathBuf,

    /// Build options (YAML or JSON); unspecified fields keep their defaults
    #[arg(short = 'c', long = "options", value_name = "OPTIONS")]
    pub options: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Comma-separated output formats
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Format::Dxf, Format::Svg]
    )]
    pub format: Vec<Format>,

    /// Also write a preview SVG (white strokes, fits its container)
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Dxf,
    Svg,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too and are not failures.
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build(args) => render::run_build(&args),
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
