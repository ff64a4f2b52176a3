// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Color primitives: packed ARGB, RGB/HSL conversion, and alpha compositing. (C1)

/// An (red, green, blue, alpha) tuple, each channel 0-255.
///
/// This is the teacher crate's own currency (`rgb::RGB8`, there aliased to
/// `Color`) widened to its four-channel sibling, since the spec's RGB is a
/// 4-tuple including alpha.
pub use rgb::RGBA8 as RGB;

/// A packed 32-bit ARGB color: bits 24-31 alpha, 16-23 red, 8-15 green, 0-7 blue.
///
/// This is the primary interchange currency of the crate; every pixel a host
/// passes to [`crate::extract_palette`] is one of these.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Color32(u32);

impl Color32 {
    /// Packs four 0-255 channel values into a `Color32`.
    pub fn pack(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color32(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha channel, 0-255.
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel, 0-255.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel, 0-255.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel, 0-255.
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Replaces the alpha byte, leaving R/G/B untouched.
    ///
    /// `alpha` is a `u8`, so out-of-range values are unrepresentable; the
    /// debug-assertion the reference implementation uses to guard this is
    /// therefore enforced by the type system instead.
    pub fn set_alpha_component(self, alpha: u8) -> Color32 {
        Color32::pack(alpha, self.r(), self.g(), self.b())
    }

    /// Converts to an (r, g, b, a) tuple.
    pub fn to_rgb(self) -> RGB {
        RGB::new(self.r(), self.g(), self.b(), self.a())
    }

    /// Converts to HSL, ignoring alpha.
    pub fn to_hsl(self) -> HSL {
        rgb_to_hsl(self.to_rgb())
    }
}

impl From<RGB> for Color32 {
    fn from(rgb: RGB) -> Self {
        Color32::pack(rgb.a, rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color32> for RGB {
    fn from(color: Color32) -> Self {
        color.to_rgb()
    }
}

/// Builds an opaque `RGB` value (alpha = 255).
pub fn opaque(r: u8, g: u8, b: u8) -> RGB {
    RGB::new(r, g, b, 255)
}

/// Hue (degrees, [0, 360)), saturation ([0, 1]), lightness ([0, 1]).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HSL {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Converts RGB to HSL using the standard non-perceptual formula.
///
/// There is a well-known singularity at `s == 0`: hue is undefined for
/// grayscale colors and this returns `0.0` for it, same as every other
/// implementation of this formula.
pub fn rgb_to_hsl(rgb: RGB) -> HSL {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return HSL { h: 0.0, s: 0.0, l };
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    HSL { h, s, l }
}

/// Converts HSL back to RGB (alpha forced to 255) using the standard inverse
/// of [`rgb_to_hsl`].
pub fn hsl_to_rgb(hsl: HSL) -> RGB {
    if hsl.s == 0.0 {
        let v = (hsl.l * 255.0).round().clamp(0.0, 255.0) as u8;
        return opaque(v, v, v);
    }

    let q = if hsl.l < 0.5 {
        hsl.l * (1.0 + hsl.s)
    } else {
        hsl.l + hsl.s - hsl.l * hsl.s
    };
    let p = 2.0 * hsl.l - q;
    let h = hsl.h / 360.0;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    opaque(to_byte(r), to_byte(g), to_byte(b))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
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

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Which formula [`composite_colors`] uses to combine alpha channels.
///
/// The reference algorithm this crate ports computes composite alpha as
/// `(a_f + a_b) * (1 - a_f)` instead of the standard alpha-over formula
/// `a_f + a_b * (1 - a_f)`. That looks like a transcription bug, but nothing
/// in the original documents which was intended, so both are offered
/// explicitly rather than silently picking one. See `DESIGN.md`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CompositingFormula {
    /// `a_out = a_f + a_b * (1 - a_f)`.
    #[default]
    StandardAlphaOver,
    /// `a_out = (a_f + a_b) * (1 - a_f)`, preserved from the reference algorithm.
    ReferenceQuirk,
}

/// Alpha-composites `fg` over `bg`.
///
/// Channels are composited premultiplied, then un-premultiplied by the
/// resulting alpha. Neither the resulting channels nor alpha are clamped
/// beyond the `u8` round-trip (they are already bounded 0-255 by
/// construction since every input channel is).
pub fn composite_colors(fg: Color32, bg: Color32, formula: CompositingFormula) -> Color32 {
    let af = fg.a() as f64 / 255.0;
    let ab = bg.a() as f64 / 255.0;

    let a_out = match formula {
        CompositingFormula::StandardAlphaOver => af + ab * (1.0 - af),
        CompositingFormula::ReferenceQuirk => (af + ab) * (1.0 - af),
    };

    let mix = |cf: u8, cb: u8| -> u8 {
        if a_out <= 0.0 {
            return 0;
        }
        let premultiplied = cf as f64 * af + cb as f64 * ab * (1.0 - af);
        (premultiplied / a_out).round().clamp(0.0, 255.0) as u8
    };

    Color32::pack(
        (a_out * 255.0).round().clamp(0.0, 255.0) as u8,
        mix(fg.r(), bg.r()),
        mix(fg.g(), bg.g()),
        mix(fg.b(), bg.b()),
    )
}
