// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

/*!
*palette-cut* extracts a representative color palette from an image.

It's a port of the "color-cut" median-cut quantizer family used for
image-driven UI theming (the same lineage as Android's `Palette` class):
a modified median-cut quantizer reduces a histogram of pixels down to a
handful of representative swatches, each annotated with WCAG-compliant
foreground text colors for overlaying on top of it.

This crate does not decode images or read files — it consumes a
pre-extracted buffer of packed ARGB pixels ([`Color32`]) and returns
swatches. Decoding and pixel extraction are a host's job.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color;
mod contrast;
mod error;
mod filter;
mod histogram;
mod quantizer;
mod swatch;

pub use color::{composite_colors, hsl_to_rgb, rgb_to_hsl, Color32, CompositingFormula, HSL, RGB};
pub use contrast::{contrast_ratio, min_alpha, relative_luminance};
pub use error::Error;
pub use swatch::{PaletteSwatch, TextColor};

use histogram::Histogram;

/// Extracts a representative color palette from `pixels`.
///
/// `max_colors` bounds the output palette size (it is not a guarantee:
/// fewer swatches are returned if the image has fewer distinct colors
/// after filtering, or if an averaged box lands in a filtered color
/// region). Each pixel's alpha is ignored and treated as opaque.
///
/// Returns `Err` only for a contract violation (`max_colors == 0`). An
/// empty or fully-filtered input is not an error: it yields an empty
/// palette.
pub fn extract_palette(pixels: &[Color32], max_colors: u16) -> Result<Vec<PaletteSwatch>, Error> {
    if max_colors < 1 {
        return Err(Error::InvalidMaxColors(max_colors));
    }

    if pixels.is_empty() {
        return Ok(Vec::new());
    }

    let histogram = Histogram::build(pixels);
    let (colors, pop) = histogram.into_filtered();

    Ok(quantizer::quantize(colors, pop, max_colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_max_colors() {
        let pixels = [Color32::pack(255, 255, 0, 0)];
        assert_eq!(extract_palette(&pixels, 0), Err(Error::InvalidMaxColors(0)));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let palette = extract_palette(&[], 8).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn solid_red_yields_one_swatch() {
        let pixels = vec![Color32::pack(255, 255, 0, 0); 100];
        let palette = extract_palette(&pixels, 4).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].population(), 100);
        let rgb = palette[0].rgb();
        assert!(rgb.r > 240 && rgb.g < 15 && rgb.b < 15);
    }

    #[test]
    fn two_distinct_colors_below_cap() {
        // Blue and yellow-green: both well clear of the near-black/
        // near-white/I-line filter bands (unlike `#FF3366CC` + `#FFCC6633`,
        // whose orange half sits inside the I-line hue/saturation band and
        // gets filtered out before quantization).
        let mut pixels = vec![Color32::pack(255, 10, 10, 200); 50];
        pixels.extend(vec![Color32::pack(255, 200, 200, 10); 30]);

        let palette = extract_palette(&pixels, 8).unwrap();
        assert_eq!(palette.len(), 2);

        let mut populations: Vec<u32> = palette.iter().map(|s| s.population()).collect();
        populations.sort_unstable();
        assert_eq!(populations, vec![30, 50]);
    }

    #[test]
    fn all_filtered_yields_empty_palette() {
        let mut pixels = vec![Color32::pack(255, 0, 0, 0); 100];
        pixels.extend(vec![Color32::pack(255, 255, 255, 255); 100]);

        let palette = extract_palette(&pixels, 8).unwrap();
        assert!(palette.is_empty());
    }
}
