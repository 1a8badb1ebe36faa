mod presenters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod storage;

pub use crate::controllers::cli::errors::RenderError;
pub use crate::controllers::cli::render::RenderController;
pub use crate::controllers::interactive::data::status::{CoordinatorStatus, GenerationOutcome};
pub use crate::controllers::interactive::errors::coordinator_error::CoordinatorError;
pub use crate::controllers::interactive::errors::session_error::SessionError;
pub use crate::controllers::interactive::ports::event_port::NotifyingSender;
pub use crate::controllers::interactive::{
    ComputeCoordinator, ComputeEvent, ComputeEventKind, ComputeEventPort, DisplayBuffer, DisplayState,
    ExplorerSession,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::cancellation::{CancelToken, CancellationFlag, Cancelled, NeverCancel};
pub use crate::core::actions::compute_stripes::compute_stripes::{StripeOutput, compute_stripes};
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::GenerateFractalError;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::config::compute_settings::ComputeSettings;
pub use crate::core::config::errors::ConfigError;
pub use crate::core::config::explorer_settings::ExplorerSettings;
pub use crate::core::config::navigation_settings::{DefaultView, NavigationSettings};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::compute_request::ComputeRequest;
pub use crate::core::data::fractal_params::{Fractal, FractalParams};
pub use crate::core::data::iteration_field::IterationField;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::stripe::{RowRange, Stripe};
pub use crate::core::data::validation::ValidationError;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::fractals::escape_time::{KernelError, UNESCAPED, escape_time, julia, mandelbrot};
pub use crate::core::fractals::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::navigation::debounce::Debouncer;
pub use crate::core::navigation::navigator::{KeyZoom, Navigator, WheelDirection};
pub use crate::core::palette::colour_scheme_kinds::ColourSchemeKind;
pub use crate::core::palette::errors::PaletteError;
pub use crate::core::palette::palette::{Palette, parse_hex_colour};
pub use crate::core::presets::builtin_presets::{builtin_presets, find_builtin};
pub use crate::core::presets::errors::PresetError;
pub use crate::core::presets::preset_record::PresetRecord;
pub use crate::core::util::calculate_stripes::calculate_stripes;
pub use crate::core::util::pixel_to_world::{pixel_to_world, world_to_pixel};
pub use crate::presenters::file::errors::ExportError;
pub use crate::presenters::file::image_file::ImageFilePresenter;
pub use crate::storage::preset_file::{read_presets, write_presets};
pub use crate::storage::settings_file::read_settings;

#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui::RunGuiCommand;
