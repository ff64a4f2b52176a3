// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Modified median-cut color quantizer: box-splitting loop with a
//! max-volume priority queue. (C4)

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::color::rgb_to_hsl;
use crate::filter::should_ignore;
use crate::histogram::Bucket;
use crate::swatch::PaletteSwatch;

#[derive(Clone, Copy)]
enum Channel {
    Red,
    Green,
    Blue,
}

/// A volume box: a half-open region of reduced color space anchored to a
/// contiguous `[lower, upper]` slice of the quantizer's shared color array.
struct Vbox {
    lower: usize,
    upper: usize,
    min_r: u8,
    max_r: u8,
    min_g: u8,
    max_g: u8,
    min_b: u8,
    max_b: u8,
    /// Tiebreaker only; never exposed outside this module.
    ordinal: u64,
}

impl Vbox {
    fn new(lower: usize, upper: usize, ordinal: u64) -> Self {
        Vbox { lower, upper, min_r: 0, max_r: 0, min_g: 0, max_g: 0, min_b: 0, max_b: 0, ordinal }
    }

    /// Recomputes tight channel bounds from the true extrema of the slice.
    fn fit(&mut self, colors: &[Bucket]) {
        let slice = &colors[self.lower..=self.upper];

        let mut min_r = u8::MAX;
        let mut max_r = 0;
        let mut min_g = u8::MAX;
        let mut max_g = 0;
        let mut min_b = u8::MAX;
        let mut max_b = 0;

        for c in slice {
            min_r = min_r.min(c.r);
            max_r = max_r.max(c.r);
            min_g = min_g.min(c.g);
            max_g = max_g.max(c.g);
            min_b = min_b.min(c.b);
            max_b = max_b.max(c.b);
        }

        self.min_r = min_r;
        self.max_r = max_r;
        self.min_g = min_g;
        self.max_g = max_g;
        self.min_b = min_b;
        self.max_b = max_b;
    }

    fn color_count(&self) -> usize {
        self.upper - self.lower + 1
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    fn volume(&self) -> u64 {
        (self.max_r - self.min_r + 1) as u64 * (self.max_g - self.min_g + 1) as u64 * (self.max_b - self.min_b + 1) as u64
    }

    /// The channel with the largest span; ties break R > G > B.
    fn longest_dimension(&self) -> Channel {
        let r_span = self.max_r - self.min_r;
        let g_span = self.max_g - self.min_g;
        let b_span = self.max_b - self.min_b;

        if r_span >= g_span && r_span >= b_span {
            Channel::Red
        } else if g_span >= b_span {
            Channel::Green
        } else {
            Channel::Blue
        }
    }

    fn channel_of(dim: Channel, c: &Bucket) -> u8 {
        match dim {
            Channel::Red => c.r,
            Channel::Green => c.g,
            Channel::Blue => c.b,
        }
    }

    /// Sorts this box's slice of the shared color array by its longest
    /// dimension (legal: box slices are disjoint) and returns the split
    /// index. For red/green the comparison at the midpoint is `>=`; for
    /// blue it's a deliberate strict `>`, preserved from the reference
    /// algorithm. Returns `lower` if no index qualifies.
    fn find_split_point(&self, colors: &mut [Bucket]) -> usize {
        let dim = self.longest_dimension();
        colors[self.lower..=self.upper].sort_by_key(|c| Self::channel_of(dim, c));

        let (min_d, max_d) = match dim {
            Channel::Red => (self.min_r, self.max_r),
            Channel::Green => (self.min_g, self.max_g),
            Channel::Blue => (self.min_b, self.max_b),
        };
        let midpoint = (min_d as u32 + max_d as u32) / 2;

        for i in self.lower..self.upper {
            let v = Self::channel_of(dim, &colors[i]) as u32;
            let past_midpoint = match dim {
                Channel::Blue => v > midpoint,
                Channel::Red | Channel::Green => v >= midpoint,
            };
            if past_midpoint {
                return i;
            }
        }

        self.lower
    }

    /// The population-weighted average color of this box's slice, as a
    /// palette swatch, unless the box has zero total population or the
    /// average itself falls in a filtered color region.
    fn average_swatch(&self, colors: &[Bucket], pop: &HashMap<Bucket, u32>) -> Option<PaletteSwatch> {
        let slice = &colors[self.lower..=self.upper];

        let mut total: u64 = 0;
        let mut r_sum: u64 = 0;
        let mut g_sum: u64 = 0;
        let mut b_sum: u64 = 0;

        for bucket in slice {
            let count = *pop.get(bucket).unwrap_or(&0) as u64;
            total += count;
            r_sum += count * bucket.r as u64;
            g_sum += count * bucket.g as u64;
            b_sum += count * bucket.b as u64;
        }

        if total == 0 {
            return None;
        }

        let average = Bucket { r: round_div(r_sum, total), g: round_div(g_sum, total), b: round_div(b_sum, total) };
        let rgb = average.expand();

        if should_ignore(rgb_to_hsl(rgb)) {
            return None;
        }

        Some(PaletteSwatch::new(rgb, total as u32))
    }
}

fn round_div(numerator: u64, denominator: u64) -> u8 {
    ((numerator as f64) / (denominator as f64)).round() as u8
}

impl PartialEq for Vbox {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for Vbox {}

impl PartialOrd for Vbox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vbox {
    /// Orders by volume (max-heap semantics via `BinaryHeap`), tiebreaking
    /// on ascending ordinal so iteration order is stable within a run.
    fn cmp(&self, other: &Self) -> Ordering {
        self.volume().cmp(&other.volume()).then_with(|| other.ordinal.cmp(&self.ordinal))
    }
}

/// Runs the box-splitting loop over `colors`/`pop` until `max_colors` boxes
/// exist or no box can split further, then emits one swatch per surviving
/// box (dropping boxes whose average is filtered or has zero population).
pub(crate) fn quantize(mut colors: Vec<Bucket>, pop: HashMap<Bucket, u32>, max_colors: u16) -> Vec<PaletteSwatch> {
    let v = colors.len();
    if v == 0 {
        return Vec::new();
    }

    let max_colors = max_colors as usize;
    if v <= max_colors {
        return colors
            .into_iter()
            .filter_map(|bucket| {
                let count = *pop.get(&bucket)?;
                Some(PaletteSwatch::new(bucket.expand(), count))
            })
            .collect();
    }

    let mut next_ordinal: u64 = 0;
    let mut heap = BinaryHeap::with_capacity(max_colors);

    let mut seed = Vbox::new(0, v - 1, next_ordinal);
    next_ordinal += 1;
    seed.fit(&colors);
    heap.push(seed);

    while heap.len() < max_colors {
        let Some(mut top) = heap.pop() else { break };

        if !top.can_split() {
            // No box can split further: put it back and stop (spec.md §4.4).
            heap.push(top);
            break;
        }

        let split = top.find_split_point(&mut colors);

        let mut right = Vbox::new(split + 1, top.upper, next_ordinal);
        next_ordinal += 1;
        right.fit(&colors);

        top.upper = split;
        top.fit(&colors);

        heap.push(top);
        heap.push(right);
    }

    heap.into_iter().filter_map(|vbox| vbox.average_swatch(&colors, &pop)).collect()
}
