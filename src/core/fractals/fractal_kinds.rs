use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    #[default]
    #[serde(alias = "Mandelbrot")]
    Mandelbrot,
    #[serde(alias = "Julia")]
    Julia,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal kind '{0}', expected 'mandelbrot' or 'julia'")]
pub struct UnknownFractalKind(pub String);

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FractalKind {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFractalKind(s.to_owned()))
    }
}
