//! Color ramps for field rendering.

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A continuous color ramp over `[0, 1]`.
///
/// This is the seam to the external palette provider: the sampler only
/// ever calls [`Palette::color`] with a normalized value. Inputs outside
/// `[0, 1]` are clamped by implementations.
pub trait Palette {
    /// Color for a normalized field value `t` in `[0, 1]`.
    fn color(&self, t: f64) -> Rgb;
}

/// A palette built from equally spaced color stops with linear
/// interpolation between them.
#[derive(Clone, Debug)]
pub struct GradientRamp {
    stops: Vec<Rgb>,
}

impl GradientRamp {
    /// Build a ramp from at least two equally spaced stops.
    ///
    /// # Panics
    ///
    /// Panics when fewer than two stops are given; a ramp needs a
    /// direction to interpolate along.
    pub fn new(stops: Vec<Rgb>) -> Self {
        assert!(stops.len() >= 2, "a gradient ramp needs at least 2 stops");
        Self { stops }
    }

    fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
        (a as f64 + (b as f64 - a as f64) * f).round() as u8
    }
}

impl Palette for GradientRamp {
    fn color(&self, t: f64) -> Rgb {
        // clamp() propagates NaN; map it to the low end instead.
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let idx = (scaled.floor() as usize).min(segments - 1);
        let f = scaled - idx as f64;
        let lo = self.stops[idx];
        let hi = self.stops[idx + 1];
        Rgb {
            r: Self::lerp_channel(lo.r, hi.r, f),
            g: Self::lerp_channel(lo.g, hi.g, f),
            b: Self::lerp_channel(lo.b, hi.b, f),
        }
    }
}
