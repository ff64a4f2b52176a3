// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Color filter policy: rejects near-black, near-white, and "red I-line"
//! (empirical skin-tone) colors. (C6)

use crate::color::HSL;

/// Lower bound, in degrees, of the empirical "red I-line" hue band.
const I_LINE_HUE_MIN: f64 = 10.0;
/// Upper bound, in degrees, of the empirical "red I-line" hue band.
const I_LINE_HUE_MAX: f64 = 37.0;
/// Colors at or below this saturation within the I-line hue band are rejected.
const I_LINE_MAX_SATURATION: f64 = 0.82;

const NEAR_BLACK_LIGHTNESS: f64 = 0.05;
const NEAR_WHITE_LIGHTNESS: f64 = 0.95;

/// Returns `true` if `hsl` should be excluded from both the candidate set
/// fed into the quantizer and from its averaged output.
pub fn should_ignore(hsl: HSL) -> bool {
    hsl.l <= NEAR_BLACK_LIGHTNESS
        || hsl.l >= NEAR_WHITE_LIGHTNESS
        || (hsl.h >= I_LINE_HUE_MIN && hsl.h <= I_LINE_HUE_MAX && hsl.s <= I_LINE_MAX_SATURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_near_black() {
        assert!(should_ignore(HSL { h: 0.0, s: 0.0, l: 0.0 }));
        assert!(should_ignore(HSL { h: 0.0, s: 0.0, l: 0.05 }));
    }

    #[test]
    fn rejects_near_white() {
        assert!(should_ignore(HSL { h: 0.0, s: 0.0, l: 1.0 }));
        assert!(should_ignore(HSL { h: 0.0, s: 0.0, l: 0.95 }));
    }

    #[test]
    fn rejects_muted_skin_tone_band() {
        assert!(should_ignore(HSL { h: 20.0, s: 0.5, l: 0.5 }));
    }

    #[test]
    fn keeps_saturated_red_in_i_line_band() {
        assert!(!should_ignore(HSL { h: 20.0, s: 0.9, l: 0.5 }));
    }

    #[test]
    fn keeps_a_generic_blue() {
        assert!(!should_ignore(HSL { h: 220.0, s: 0.6, l: 0.5 }));
    }
}
