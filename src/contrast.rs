// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! WCAG 2.0 relative luminance, contrast ratio, and minimum-alpha search. (C2)

use crate::color::{composite_colors, CompositingFormula, Color32};

/// WCAG 2.0 relative luminance of an RGB color.
pub fn relative_luminance(rgb: crate::color::RGB) -> f64 {
    let linearize = |c: u8| -> f64 {
        let v = c as f64 / 255.0;
        if v < 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between `fg` and `bg`.
///
/// `bg` must be fully opaque. If `fg` carries transparency, it is first
/// composited over `bg` (using [`CompositingFormula::StandardAlphaOver`] —
/// a correctness-sensitive contrast check should not inherit the reference
/// algorithm's alpha-formula quirk, see `color::CompositingFormula`).
pub fn contrast_ratio(fg: Color32, bg: Color32) -> f64 {
    debug_assert_eq!(bg.a(), 255, "contrast_ratio requires an opaque background");

    let fg_opaque = if fg.a() < 255 {
        composite_colors(fg, bg, CompositingFormula::StandardAlphaOver)
    } else {
        fg
    };

    let l1 = relative_luminance(fg_opaque.to_rgb());
    let l2 = relative_luminance(bg.to_rgb());

    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Searches for the minimum alpha (0-255) at which overlaying `fg` on `bg`
/// reaches `target` contrast, or `None` if even a fully opaque `fg` can't.
///
/// This is a bounded, deliberately approximate binary search: it runs at
/// most 10 iterations and stops early once the search interval has shrunk
/// to 10 or fewer alpha levels, returning the high (known-passing) end of
/// the final interval. It assumes `contrast_ratio` is monotonic in alpha
/// over `[0, 255]` for the given `fg`/`bg` pair, which holds whenever `fg`
/// and `bg` differ in luminance (see the crate's property tests).
pub fn min_alpha(fg: Color32, bg: Color32, target: f64) -> Option<u8> {
    debug_assert_eq!(bg.a(), 255, "min_alpha requires an opaque background");

    if contrast_ratio(fg.set_alpha_component(255), bg) < target {
        return None;
    }

    let mut lo: i32 = 0;
    let mut hi: i32 = 255;

    for _ in 0..10 {
        if hi - lo <= 10 {
            break;
        }

        let mid = (lo + hi) / 2;
        let contrast = contrast_ratio(fg.set_alpha_component(mid as u8), bg);
        if contrast < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some(hi as u8)
}
