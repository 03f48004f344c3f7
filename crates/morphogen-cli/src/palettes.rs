//! Named color palettes for the settings file.
//!
//! Each palette approximates the matplotlib colormap of the same name
//! with a gradient ramp over a handful of anchor colors, which is
//! plenty at the bit depth of the output frames.

use morphogen_render::{GradientRamp, Rgb};

/// Resolve a palette name from a settings file.
///
/// Matching is exact; names follow matplotlib conventions, so
/// sequential single-hue maps are capitalized ("Blues") and perceptual
/// maps are lowercase ("viridis").
pub fn lookup(name: &str) -> Option<GradientRamp> {
    let stops: &[Rgb] = match name {
        "Blues" => &[
            Rgb::new(247, 251, 255),
            Rgb::new(107, 174, 214),
            Rgb::new(8, 48, 107),
        ],
        "Reds" => &[
            Rgb::new(255, 245, 240),
            Rgb::new(251, 106, 74),
            Rgb::new(103, 0, 13),
        ],
        "Greens" => &[
            Rgb::new(247, 252, 245),
            Rgb::new(116, 196, 118),
            Rgb::new(0, 68, 27),
        ],
        "Greys" => &[Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)],
        "viridis" => &[
            Rgb::new(68, 1, 84),
            Rgb::new(59, 82, 139),
            Rgb::new(33, 145, 140),
            Rgb::new(94, 201, 98),
            Rgb::new(253, 231, 37),
        ],
        "magma" => &[
            Rgb::new(0, 0, 4),
            Rgb::new(121, 34, 130),
            Rgb::new(245, 125, 21),
            Rgb::new(252, 253, 191),
        ],
        _ => return None,
    };
    Some(GradientRamp::new(stops.to_vec()))
}

/// Every name [`lookup`] accepts, for error messages and docs.
pub const NAMES: &[&str] = &["Blues", "Reds", "Greens", "Greys", "viridis", "magma"];

#[cfg(test)]
mod tests {
    use super::*;
    use morphogen_render::Palette;

    #[test]
    fn every_listed_name_resolves() {
        for name in NAMES {
            assert!(lookup(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn unknown_name_does_not() {
        assert!(lookup("Chartreuse").is_none());
        assert!(lookup("blues").is_none());
    }

    #[test]
    fn ramps_span_their_endpoints() {
        let blues = lookup("Blues").unwrap();
        assert_eq!(blues.color(0.0), Rgb::new(247, 251, 255));
        assert_eq!(blues.color(1.0), Rgb::new(8, 48, 107));
    }
}
