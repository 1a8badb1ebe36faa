use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use escape_explorer::{
    ColourSchemeKind, Complex, ExplorerSettings, Fractal, FractalKind, Palette, RunGuiCommand, read_settings,
};

/// Interactive escape-time fractal explorer.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
struct Args {
    /// JSON settings file overriding compute and navigation defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[arg(short, long, default_value_t = FractalKind::default())]
    fractal: FractalKind,

    #[arg(long, allow_negative_numbers = true, default_value_t = -0.7)]
    c_real: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0.27015)]
    c_imag: f64,

    #[arg(long, default_value_t = ColourSchemeKind::default())]
    scheme: ColourSchemeKind,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => ExplorerSettings::default(),
    };
    let fractal = match args.fractal {
        FractalKind::Mandelbrot => Fractal::Mandelbrot,
        FractalKind::Julia => Fractal::Julia {
            c: Complex::new(args.c_real, args.c_imag),
        },
    };

    RunGuiCommand::new(settings, fractal, Palette::from_scheme(args.scheme)).execute()?;

    Ok(())
}
