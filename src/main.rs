use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use escape_explorer::{
    ColourSchemeKind, ComputeRequest, ExplorerSettings, FractalKind, ImageFilePresenter, Palette, PresetRecord,
    RenderController, builtin_presets, find_builtin, parse_hex_colour, read_presets, read_settings,
};

/// Render one escape-time fractal view to an image file.
#[derive(Debug, Parser)]
#[command(name = "escape_explorer", version, about)]
struct Args {
    /// Built-in preset to render, e.g. "Julia dragon"
    #[arg(short, long, conflicts_with = "preset_file")]
    preset: Option<String>,

    /// JSON file holding one preset or an array of presets; the first is used
    /// unless --preset-name picks another
    #[arg(long)]
    preset_file: Option<PathBuf>,

    #[arg(long, requires = "preset_file")]
    preset_name: Option<String>,

    /// JSON settings file overriding compute and navigation defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[arg(short, long)]
    fractal: Option<FractalKind>,

    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f64>,

    #[arg(short, long)]
    zoom: Option<f64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(short = 'i', long)]
    max_iterations: Option<u32>,

    /// Julia constant, real part
    #[arg(long, allow_negative_numbers = true)]
    c_real: Option<f64>,

    /// Julia constant, imaginary part
    #[arg(long, allow_negative_numbers = true)]
    c_imag: Option<f64>,

    /// Named colour scheme
    #[arg(long, default_value_t = ColourSchemeKind::default())]
    scheme: ColourSchemeKind,

    /// Comma-separated hex anchors for a custom gradient; overrides --scheme
    #[arg(long, value_delimiter = ',')]
    colours: Vec<String>,

    /// Output image; the extension picks PNG, JPEG, BMP or PPM
    #[arg(short, long, default_value = "output/fractal.png")]
    output: PathBuf,

    /// Print the built-in presets and exit
    #[arg(long)]
    list_presets: bool,
}

impl Args {
    fn preset(&self) -> Result<Option<PresetRecord>, Box<dyn Error>> {
        if let Some(name) = &self.preset {
            return Ok(Some(find_builtin(name)?));
        }

        let Some(path) = &self.preset_file else {
            return Ok(None);
        };
        let presets = read_presets(path)?;
        let preset = match &self.preset_name {
            Some(name) => presets.into_iter().find(|p| p.name.eq_ignore_ascii_case(name)),
            None => presets.into_iter().next(),
        };

        preset
            .map(Some)
            .ok_or_else(|| format!("no matching preset in {}", path.display()).into())
    }

    fn request(&self, settings: &ExplorerSettings) -> Result<ComputeRequest, Box<dyn Error>> {
        let default_view = settings.navigation.default_view;
        let width = self.width.unwrap_or(default_view.width);
        let height = self.height.unwrap_or(default_view.height);

        let mut request = match self.preset()? {
            Some(preset) => {
                info!("using preset '{}'", preset.name);
                preset.to_request(width, height)
            }
            None => ComputeRequest {
                fractal_kind: FractalKind::Mandelbrot,
                center_x: default_view.center_x,
                center_y: default_view.center_y,
                zoom: default_view.zoom,
                width,
                height,
                max_iterations: default_view.max_iterations,
                c_real: None,
                c_imag: None,
            },
        };

        if let Some(kind) = self.fractal {
            request.fractal_kind = kind;
        }
        request.center_x = self.center_x.unwrap_or(request.center_x);
        request.center_y = self.center_y.unwrap_or(request.center_y);
        request.zoom = self.zoom.unwrap_or(request.zoom);
        request.max_iterations = self.max_iterations.unwrap_or(request.max_iterations);
        request.c_real = self.c_real.or(request.c_real);
        request.c_imag = self.c_imag.or(request.c_imag);

        Ok(request)
    }

    fn palette(&self) -> Result<Palette, Box<dyn Error>> {
        if self.colours.is_empty() {
            return Ok(Palette::from_scheme(self.scheme));
        }

        let anchors = self
            .colours
            .iter()
            .map(|text| parse_hex_colour(text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Palette::custom(&anchors))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list_presets {
        for preset in builtin_presets() {
            println!("{:<22} {}", preset.name, preset.fractal_kind);
        }
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => ExplorerSettings::default(),
    };
    let request = args.request(&settings)?;
    let palette = args.palette()?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = RenderController::new(ImageFilePresenter::new(), settings.compute)?;
    let elapsed = controller.generate(&request, &palette)?;
    controller.write(&args.output)?;

    info!("rendered {} in {:?}", args.output.display(), elapsed);
    Ok(())
}
