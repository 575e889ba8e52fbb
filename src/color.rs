//! Heat color ramp.
//!
//! Normalized temperatures map onto a single hue sweep from blue (240°) at
//! `t = 0` to red (0°) at `t = 1`, at full saturation and half lightness.

use std::fmt;

use rgb::RGB8;

/// Hue at `t = 0`.
pub const COLD_HUE: f64 = 240.0;

/// HSL color: h in degrees, s and l in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl fmt::Display for Hsl {
    /// CSS form, e.g. `hsl(240, 100%, 50%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}

impl Hsl {
    /// Converts to 8-bit RGB.
    #[must_use]
    pub fn to_rgb8(&self) -> RGB8 {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return RGB8::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round() as u8;
        RGB8::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
    }

    /// Uppercase `#RRGGBB` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let rgb = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Color for a normalized temperature.
///
/// `t` is not clamped; callers pass values produced by the color scale,
/// which are already in `[0, 1]` for every observed temperature.
///
/// # Example
///
/// ```
/// use temp_heatmap::color::heat_color;
///
/// assert_eq!(heat_color(0.0).to_string(), "hsl(240, 100%, 50%)");
/// assert_eq!(heat_color(1.0).to_string(), "hsl(0, 100%, 50%)");
/// ```
#[must_use]
pub fn heat_color(t: f64) -> Hsl {
    Hsl {
        h: (1.0 - t) * COLD_HUE,
        s: 1.0,
        l: 0.5,
    }
}
