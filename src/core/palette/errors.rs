use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("unknown colour scheme '{0}'")]
    UnknownScheme(String),
    #[error("invalid colour '{0}', expected #rrggbb")]
    InvalidColour(String),
}
