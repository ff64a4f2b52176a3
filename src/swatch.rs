// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Final swatches with WCAG-derived title/body foreground colors. (C5)

use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use crate::color::{Color32, RGB};
use crate::contrast::min_alpha;

/// Target contrast ratio for body text overlaid on a swatch.
const BODY_TARGET_CONTRAST: f64 = 4.5;
/// Target contrast ratio for title text overlaid on a swatch.
const TITLE_TARGET_CONTRAST: f64 = 3.0;

/// A foreground overlay color for text: either white or black at the
/// minimum alpha needed to reach a target contrast ratio.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextColor {
    /// `1` for white, `0` for black.
    pub gray: u8,
    /// Overlay alpha, `[0, 1]`.
    pub alpha: f64,
}

impl TextColor {
    fn white(alpha_byte: u8) -> Self {
        TextColor { gray: 1, alpha: alpha_byte as f64 / 255.0 }
    }

    fn black(alpha_byte: u8) -> Self {
        TextColor { gray: 0, alpha: alpha_byte as f64 / 255.0 }
    }
}

/// A single output color with its pixel population and lazily-computed
/// text-overlay colors.
#[derive(Clone, Debug)]
pub struct PaletteSwatch {
    rgb: RGB,
    color32: Color32,
    population: u32,
    text_colors: OnceCell<(Option<TextColor>, Option<TextColor>)>,
}

impl PaletteSwatch {
    pub(crate) fn new(rgb: RGB, population: u32) -> Self {
        PaletteSwatch { rgb, color32: rgb.into(), population, text_colors: OnceCell::new() }
    }

    /// The swatch's color as an (r, g, b, a) tuple.
    pub fn rgb(&self) -> RGB {
        self.rgb
    }

    /// The swatch's color as a packed ARGB integer.
    pub fn color32(&self) -> Color32 {
        self.color32
    }

    /// The pixel population this swatch represents.
    pub fn population(&self) -> u32 {
        self.population
    }

    fn text_colors(&self) -> &(Option<TextColor>, Option<TextColor>) {
        self.text_colors.get_or_init(|| generate_text_colors(self.color32))
    }

    /// The foreground color for title text overlaid on this swatch, if any
    /// overlay reaches the title contrast target. Computed on first read
    /// and cached.
    pub fn title_text_color(&self) -> Option<TextColor> {
        self.text_colors().0
    }

    /// The foreground color for body text overlaid on this swatch, if any
    /// overlay reaches the body contrast target. Computed on first read
    /// and cached.
    pub fn body_text_color(&self) -> Option<TextColor> {
        self.text_colors().1
    }
}

impl PartialEq for PaletteSwatch {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.population == other.population
    }
}

impl Eq for PaletteSwatch {}

impl Hash for PaletteSwatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
        self.population.hash(state);
    }
}

/// Computes (title, body) text colors for a swatch.
///
/// Title and body are resolved independently: each tries a white overlay
/// first, falling back to black if white can't reach that field's contrast
/// target, and is left unset if neither can. Resolving the two fields
/// independently (rather than requiring a single overlay color to satisfy
/// both at once) is what lets a swatch like solid red get a white title
/// even though only black reaches the stricter body target.
fn generate_text_colors(swatch: Color32) -> (Option<TextColor>, Option<TextColor>) {
    let white = Color32::pack(255, 255, 255, 255);
    let black = Color32::pack(255, 0, 0, 0);

    let resolve = |target: f64| -> Option<TextColor> {
        min_alpha(white, swatch, target)
            .map(TextColor::white)
            .or_else(|| min_alpha(black, swatch, target).map(TextColor::black))
    };

    (resolve(TITLE_TARGET_CONTRAST), resolve(BODY_TARGET_CONTRAST))
}
