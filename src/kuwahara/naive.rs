use super::quadrant::{channel_means, QuadrantSampler, QuadrantStats};
use super::window::Rect;
use crate::Image;
use image::Pixel;
use itertools::iproduct;

/// Reference sampler reading every pixel of a quadrant twice
///
/// The first pass computes the truncated mean, the second accumulates the
/// squared deviations from it. Cost is `O(q^2)` per quadrant.
pub struct NaiveSampler<'a, P: Pixel<Subpixel = u8>> {
    image: &'a Image<P>,
}

impl<'a, P: Pixel<Subpixel = u8>> NaiveSampler<'a, P> {
    pub const fn new(image: &'a Image<P>) -> Self {
        Self { image }
    }

    fn samples(&self, rect: Rect) -> impl Iterator<Item = [u64; 3]> + '_ {
        iproduct!(rect.y1..=rect.y2, rect.x1..=rect.x2).map(move |(y, x)| {
            let rgba = self.image.get_pixel(x, y).to_rgba();
            [rgba[0], rgba[1], rgba[2]].map(u64::from)
        })
    }
}

impl<P: Pixel<Subpixel = u8>> QuadrantSampler for NaiveSampler<'_, P> {
    fn stats(&self, rect: Rect) -> QuadrantStats {
        let area = rect.area();

        let sums = self.samples(rect).fold([0u64; 3], |mut acc, sample| {
            for (total, value) in acc.iter_mut().zip(sample) {
                *total += value;
            }
            acc
        });
        let means = channel_means(sums, area);

        let squared_deviations = self.samples(rect).fold([0u64; 3], |mut acc, sample| {
            for ((total, value), mean) in acc.iter_mut().zip(sample).zip(means) {
                let deviation = value.abs_diff(mean);
                *total += deviation * deviation;
            }
            acc
        });

        QuadrantStats::new(means, squared_deviations, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_rgba_image;
    use image::{Luma, Rgba};

    #[test]
    fn two_color_quadrant_has_positive_variance() {
        // (200,150,100), (100,200,150), (150,100,200), (50,75,25)
        let image = create_test_rgba_image();
        let sampler = NaiveSampler::new(&image);
        let stats = sampler.stats(Rect {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 0,
        });

        assert_eq!(stats.mean, Rgba([150, 175, 125, 255]));
        // (5000 + 1250 + 1250) / (3 * 2)
        assert_eq!(stats.variance(), 1250);
    }

    #[test]
    fn full_quadrant_mean_truncates() {
        let image = create_test_rgba_image();
        let stats = NaiveSampler::new(&image).stats(Rect {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 1,
        });

        // R: 500/4, G: 525/4, B: 475/4
        assert_eq!(stats.mean, Rgba([125, 131, 118, 255]));
        assert!(stats.variance() > 0);
    }

    #[test]
    fn single_pixel_has_zero_variance_and_opaque_mean() {
        let image = create_test_rgba_image();
        let stats = NaiveSampler::new(&image).stats(Rect::point(1, 1));

        assert_eq!(stats.mean, Rgba([50, 75, 25, 255]));
        assert_eq!(stats.squared_deviation, 0);
    }

    #[test]
    fn grayscale_input_is_widened_to_rgb() {
        let image: Image<Luma<u8>> = Image::from_pixel(3, 3, Luma([90]));
        let stats = NaiveSampler::new(&image).stats(Rect {
            x1: 0,
            y1: 0,
            x2: 2,
            y2: 2,
        });

        assert_eq!(stats.mean, Rgba([90, 90, 90, 255]));
        assert_eq!(stats.squared_deviation, 0);
    }
}
