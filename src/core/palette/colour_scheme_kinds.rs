use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::palette::errors::PaletteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourSchemeKind {
    #[default]
    Classic,
    Rainbow,
    Fire,
    Ocean,
    Forest,
    PinkDream,
    Neon,
    Sunset,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Rainbow,
        Self::Fire,
        Self::Ocean,
        Self::Forest,
        Self::PinkDream,
        Self::Neon,
        Self::Sunset,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::PinkDream => "Pink dream",
            Self::Neon => "Neon",
            Self::Sunset => "Sunset",
        }
    }

    /// Stable identifier used in settings files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Rainbow => "rainbow",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::PinkDream => "pink_dream",
            Self::Neon => "neon",
            Self::Sunset => "sunset",
        }
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColourSchemeKind {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s) || kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PaletteError::UnknownScheme(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourSchemeKind::ALL.first(), Some(&ColourSchemeKind::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourSchemeKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn keys_parse_back_to_their_kind() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(kind.key().parse::<ColourSchemeKind>(), Ok(kind));
            assert_eq!(kind.display_name().parse::<ColourSchemeKind>(), Ok(kind));
        }
    }

    #[test]
    fn serde_uses_keys() {
        assert_eq!(
            serde_json::to_string(&ColourSchemeKind::PinkDream).unwrap(),
            r#""pink_dream""#
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "plasma".parse::<ColourSchemeKind>(),
            Err(PaletteError::UnknownScheme("plasma".to_owned()))
        );
    }
}
