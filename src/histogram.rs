// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Histogram builder: quantizes pixel channels to 5 bits each and tallies
//! populations. (C3)

use std::collections::HashMap;

use crate::color::{opaque, rgb_to_hsl, Color32, RGB};
use crate::filter::should_ignore;

/// Number of bits each channel is right-shifted by, retaining the high
/// 5 bits (so `32` buckets per channel, `32768` total).
const CHANNEL_SHIFT: u32 = 3;

/// A reduced-precision color key: 5 bits per channel, alpha always opaque.
///
/// This is the "reduced-precision Color32" the spec describes, modeled as
/// its own type (rather than a `Color32` whose channels only use 5 of
/// their 8 bits) so `Color32`'s documented 0-255 channel range stays
/// truthful everywhere it's used in the public API. See `DESIGN.md`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Bucket {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Bucket {
    fn from_color32(c: Color32) -> Self {
        Bucket { r: c.r() >> CHANNEL_SHIFT, g: c.g() >> CHANNEL_SHIFT, b: c.b() >> CHANNEL_SHIFT }
    }

    /// Expands a reduced (0-31) channel triple back to a full 0-255 RGB
    /// color by bit replication, so a fully-saturated reduced channel (31)
    /// expands to 255 and 0 expands to 0.
    pub(crate) fn expand(self) -> RGB {
        opaque(expand_channel(self.r), expand_channel(self.g), expand_channel(self.b))
    }
}

fn expand_channel(v: u8) -> u8 {
    (v << 3) | (v >> 2)
}

/// A histogram of reduced-precision colors to pixel counts.
pub(crate) struct Histogram {
    counts: HashMap<Bucket, u32>,
}

impl Histogram {
    /// Builds a histogram from a finite sequence of pixels. Each pixel's
    /// alpha is ignored; histogram keys are always conceptually opaque.
    pub(crate) fn build(pixels: &[Color32]) -> Self {
        let mut counts = HashMap::new();
        for &pixel in pixels {
            let bucket = Bucket::from_color32(pixel);
            *counts.entry(bucket).or_insert(0) += 1;
        }
        Histogram { counts }
    }

    /// Splits the histogram into the colors surviving the filter policy
    /// (candidates for quantization) and the full population map (every
    /// surviving color is looked up in it; entries for rejected colors are
    /// simply never consulted).
    pub(crate) fn into_filtered(self) -> (Vec<Bucket>, HashMap<Bucket, u32>) {
        let colors = self
            .counts
            .keys()
            .copied()
            .filter(|bucket| !should_ignore(rgb_to_hsl(bucket.expand())))
            .collect();
        (colors, self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_key_equality_drives_population_merging() {
        // These two colors differ only in their low 3 bits per channel, so
        // they must land in the same bucket and merge their counts.
        let pixels = [Color32::pack(255, 0b0001_0000, 0b0010_0000, 0b0011_0000), Color32::pack(255, 0b0001_0111, 0b0010_0111, 0b0011_0111)];
        let histogram = Histogram::build(&pixels);
        assert_eq!(histogram.counts.len(), 1);
        assert_eq!(*histogram.counts.values().next().unwrap(), 2);
    }

    #[test]
    fn expand_is_identity_at_the_extremes() {
        assert_eq!(expand_channel(0), 0);
        assert_eq!(expand_channel(31), 255);
    }

    #[test]
    fn filters_out_near_black_and_near_white() {
        let pixels = [Color32::pack(255, 0, 0, 0), Color32::pack(255, 255, 255, 255), Color32::pack(255, 200, 40, 40)];
        let histogram = Histogram::build(&pixels);
        let (colors, _) = histogram.into_filtered();
        assert_eq!(colors.len(), 1);
    }
}
