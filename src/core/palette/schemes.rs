use std::f64::consts::TAU;

use crate::core::data::colour::Colour;
use crate::core::palette::colour_scheme_kinds::ColourSchemeKind;

/// Colour at `index` of the 256-entry palette for `kind`.
#[must_use]
pub fn scheme_colour(kind: ColourSchemeKind, index: u8) -> Colour {
    match kind {
        ColourSchemeKind::Classic => classic(index),
        ColourSchemeKind::Rainbow => rainbow(index),
        ColourSchemeKind::Fire => fire(index),
        ColourSchemeKind::Ocean => ocean(index),
        ColourSchemeKind::Forest => forest(index),
        ColourSchemeKind::PinkDream => pink_dream(index),
        ColourSchemeKind::Neon => neon(index),
        ColourSchemeKind::Sunset => sunset(index),
    }
}

/// Black through blue and cyan to white.
fn classic(i: u8) -> Colour {
    match i {
        0..64 => Colour::new(0, 0, i * 4),
        64..128 => Colour::new(0, (i - 64) * 4, 255),
        128..192 => Colour::new((i - 128) * 4, 255, 255),
        _ => Colour::WHITE,
    }
}

fn rainbow(i: u8) -> Colour {
    let hue = u32::from(i) * 360 / 256;
    hsv_full(hue)
}

/// Fully saturated, full value HSV colour for a hue in whole degrees.
fn hsv_full(hue: u32) -> Colour {
    let sector = hue / 60;
    let f = f64::from(hue % 60) / 60.0;
    let channel = |x: f64| (x * 255.0).round() as u8;

    let (r, g, b) = match sector {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };

    Colour::new(channel(r), channel(g), channel(b))
}

fn fire(i: u8) -> Colour {
    match i {
        0..85 => Colour::new(i * 3, 0, 0),
        85..170 => Colour::new(255, (i - 85) * 3, 0),
        _ => Colour::new(255, 255, (i - 170) * 3),
    }
}

fn ocean(i: u8) -> Colour {
    if i < 128 {
        Colour::new(0, i * 2, 128 + i)
    } else {
        Colour::new((i - 128) * 2, 255, 255)
    }
}

fn forest(i: u8) -> Colour {
    match i {
        0..100 => Colour::new(0, 50 + i * 2, 0),
        100..200 => Colour::new((i - 100) * 2, 255, i - 100),
        _ => Colour::new(255, 255, 200 + (i - 200)),
    }
}

fn pink_dream(i: u8) -> Colour {
    // offsets are truncated like the channel values they are added to
    let step = |t: f64, span: f64| (span * t) as u8;

    match i {
        0..90 => {
            let t = f64::from(i) / 90.0;
            Colour::new(245 + step(t, 10.0), 225 + step(t, 15.0), 235 + step(t, 15.0))
        }
        90..160 => {
            let t = f64::from(i - 90) / 70.0;
            Colour::new(255, 240 - step(t, 25.0), 250 - step(t, 20.0))
        }
        160..220 => {
            let t = f64::from(i - 160) / 60.0;
            Colour::new(255 - step(t, 20.0), 215 - step(t, 10.0), 230 + step(t, 25.0))
        }
        _ => {
            let t = f64::from(i - 220) / 36.0;
            Colour::new(235 + step(t, 20.0), 205 + step(t, 50.0), 255)
        }
    }
}

/// Three sine waves a third of a turn apart.
fn neon(i: u8) -> Colour {
    let phase = f64::from(i) / 256.0 * TAU;
    let wave = |offset: f64| (128.0 + 127.0 * (phase + offset).sin()) as u8;

    Colour::new(wave(0.0), wave(2.094), wave(4.188))
}

fn sunset(i: u8) -> Colour {
    match i {
        0..100 => Colour::new(255, 100 + i, 0),
        100..180 => Colour::new(255, 200 - (i - 100), (i - 100) * 3),
        _ => Colour::new(255 - (i - 180), 50, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_ramps_through_blue_and_cyan() {
        assert_eq!(classic(0), Colour::BLACK);
        assert_eq!(classic(63), Colour::new(0, 0, 252));
        assert_eq!(classic(100), Colour::new(0, 144, 255));
        assert_eq!(classic(191), Colour::new(252, 255, 255));
        assert_eq!(classic(255), Colour::WHITE);
    }

    #[test]
    fn test_classic_is_a_non_decreasing_ramp() {
        let brightness = |c: Colour| u32::from(c.r) + u32::from(c.g) + u32::from(c.b);

        for i in 1..=255u8 {
            assert!(brightness(classic(i)) >= brightness(classic(i - 1)), "index {}", i);
        }
    }

    #[test]
    fn test_fire_segment_boundaries() {
        assert_eq!(fire(84), Colour::new(252, 0, 0));
        assert_eq!(fire(85), Colour::new(255, 0, 0));
        assert_eq!(fire(170), Colour::new(255, 255, 0));
        assert_eq!(fire(255), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_rainbow_primary_hues() {
        assert_eq!(rainbow(0), Colour::new(255, 0, 0));
        // 85 * 360 / 256 = 119 degrees, just short of pure green
        assert_eq!(rainbow(85).g, 255);
        assert_eq!(rainbow(85).b, 0);
        // 171 * 360 / 256 = 240 degrees
        assert_eq!(rainbow(171), Colour::new(0, 0, 255));
    }

    #[test]
    fn test_sunset_and_forest_endpoints() {
        assert_eq!(sunset(0), Colour::new(255, 100, 0));
        assert_eq!(sunset(255), Colour::new(180, 50, 255));
        assert_eq!(forest(0), Colour::new(0, 50, 0));
        assert_eq!(forest(255), Colour::new(255, 255, 255));
        assert_eq!(ocean(0), Colour::new(0, 0, 128));
        assert_eq!(ocean(255), Colour::new(254, 255, 255));
    }

    #[test]
    fn test_pink_dream_stays_pastel() {
        for i in 0..=255u8 {
            let c = pink_dream(i);
            assert!(c.r >= 235 && c.g >= 205 && c.b >= 230, "index {} is {:?}", i, c);
        }
    }

    #[test]
    fn test_neon_starts_mid_red() {
        assert_eq!(neon(0).r, 128);
    }
}
