use std::cmp::Ordering;

use super::window::Rect;
use image::Rgba;

/// Mean color and color spread of one quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantStats {
    /// Truncated per-channel mean, alpha always fully opaque
    pub mean: Rgba<u8>,
    /// Squared deviations from `mean`, summed over R, G and B
    pub squared_deviation: u64,
    /// Number of pixels in the quadrant
    pub area: u64,
}

impl QuadrantStats {
    /// Builds the statistics from per-channel means and squared deviations
    /// summed over `area` pixels
    pub(crate) fn new(means: [u64; 3], squared_deviations: [u64; 3], area: u64) -> Self {
        let [r, g, b] = means.map(|m| m.min(u64::from(u8::MAX)) as u8);

        Self {
            mean: Rgba([r, g, b, u8::MAX]),
            squared_deviation: squared_deviations.iter().sum(),
            area,
        }
    }

    /// Variance score: mean squared deviation averaged over the three
    /// channels, truncated to an integer
    #[must_use]
    pub const fn variance(&self) -> u64 {
        self.squared_deviation / (3 * self.area)
    }

    /// Compares the exact (untruncated) variance scores
    ///
    /// Quadrants of different areas are compared by cross-multiplying, so
    /// no precision is lost to integer division.
    #[must_use]
    pub fn cmp_variance(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.squared_deviation) * u128::from(other.area);
        let rhs = u128::from(other.squared_deviation) * u128::from(self.area);
        lhs.cmp(&rhs)
    }
}

/// Truncated per-channel means of `sums` over `area` pixels
#[inline]
pub(crate) fn channel_means(sums: [u64; 3], area: u64) -> [u64; 3] {
    sums.map(|sum| sum / area)
}

/// Source of quadrant statistics over an image
///
/// Implementations must return identical results for identical rectangles;
/// the filter result does not depend on which sampler is used.
pub trait QuadrantSampler {
    /// Computes mean and spread over the pixels of `rect`
    fn stats(&self, rect: Rect) -> QuadrantStats;
}
