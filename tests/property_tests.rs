//! Property-based tests for imageops-kuwahara
//!
//! These tests use proptest to verify invariants of the Kuwahara filter
//! that should hold for all inputs.

use image::{Rgb, Rgba};
use imageops_kuwahara::{
    Image, IntegralSampler, Kuwahara, KuwaharaOptions, Method, NaiveSampler, QuadrantSampler,
    Rect,
};
use proptest::prelude::*;

/// Strategy for generating small but valid image dimensions
fn image_dimensions() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=16, 1u32..=16)
}

/// Strategy for generating window sizes, even ones included
fn window_size() -> impl Strategy<Value = u32> {
    1u32..=9
}

/// Strategy for generating RGB pixel values
fn rgb_pixel() -> impl Strategy<Value = Rgb<u8>> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb([r, g, b]))
}

/// Strategy for generating an RGB image with arbitrary content
fn rgb_image() -> impl Strategy<Value = Image<Rgb<u8>>> {
    image_dimensions().prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<u8>(), (width * height * 3) as usize).prop_map(
            move |data| {
                Image::<Rgb<u8>>::from_raw(width, height, data)
                    .unwrap_or_else(|| Image::new(width, height))
            },
        )
    })
}

proptest! {
    /// Property: Output dimensions always equal input dimensions
    #[test]
    fn filter_preserves_dimensions(image in rgb_image(), window in window_size()) {
        let filtered = image.kuwahara(window).unwrap();
        prop_assert_eq!(filtered.dimensions(), image.dimensions());
    }

    /// Property: A uniform image is a fixed point
    #[test]
    fn uniform_image_is_unchanged(
        (width, height) in image_dimensions(),
        pixel in rgb_pixel(),
        window in window_size()
    ) {
        let image: Image<Rgb<u8>> = Image::from_pixel(width, height, pixel);
        let filtered = image.kuwahara(window).unwrap();
        let expected = Rgba([pixel[0], pixel[1], pixel[2], 255]);
        prop_assert!(filtered.pixels().all(|p| *p == expected));
    }

    /// Property: Naive and summed-area-table methods are bit-identical
    #[test]
    fn methods_agree(image in rgb_image(), window in window_size()) {
        let naive = image
            .kuwahara_with(&KuwaharaOptions::new(window).with_method(Method::Naive))
            .unwrap();
        let integral = image
            .kuwahara_with(&KuwaharaOptions::new(window).with_method(Method::SummedAreaTable))
            .unwrap();
        prop_assert_eq!(naive, integral);
    }

    /// Property: Every output pixel is fully opaque
    #[test]
    fn output_is_opaque(image in rgb_image(), window in window_size()) {
        let filtered = image.kuwahara(window).unwrap();
        prop_assert!(filtered.pixels().all(|p| p[3] == 255));
    }

    /// Property: Every output channel lies within the input's channel range
    #[test]
    fn output_stays_within_input_range(image in rgb_image(), window in window_size()) {
        let filtered = image.kuwahara(window).unwrap();
        for c in 0..3 {
            let min = image.pixels().map(|p| p[c]).min().unwrap_or(0);
            let max = image.pixels().map(|p| p[c]).max().unwrap_or(255);
            prop_assert!(filtered.pixels().all(|p| p[c] >= min && p[c] <= max));
        }
    }

    /// Property: The top-left pixel takes the mean of its south-east quadrant
    #[test]
    fn top_left_corner_uses_only_south_east(
        image in (5u32..=12, 5u32..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |data| Image::<Rgb<u8>>::from_raw(w, h, data))
        }),
        window in prop::sample::select(vec![3u32, 5, 7, 9])
    ) {
        let image = image.unwrap_or_else(|| Image::new(5, 5));
        let q = window / 2 + 1;
        prop_assume!(image.width() >= 2 * q - 1 && image.height() >= 2 * q - 1);

        let expected = NaiveSampler::new(&image)
            .stats(Rect { x1: 0, y1: 0, x2: q - 1, y2: q - 1 })
            .mean;
        let filtered = image.kuwahara(window).unwrap();
        prop_assert_eq!(*filtered.get_pixel(0, 0), expected);
    }

    /// Property: Two distinct colors give positive spread, one color gives zero
    #[test]
    fn variance_is_positive_only_for_mixed_quadrants(
        a in rgb_pixel(),
        b in rgb_pixel(),
        q in 1u32..=6,
        split in 0u32..36
    ) {
        let area = q * q;
        let split = split % area;
        let image: Image<Rgb<u8>> =
            Image::from_fn(q, q, |x, y| if y * q + x < split { a } else { b });
        let rect = Rect { x1: 0, y1: 0, x2: q - 1, y2: q - 1 };

        let naive = NaiveSampler::new(&image).stats(rect);
        let integral = IntegralSampler::new(&image).stats(rect);
        prop_assert_eq!(naive, integral);

        if split > 0 && a != b {
            prop_assert!(naive.squared_deviation > 0);
        } else {
            prop_assert_eq!(naive.squared_deviation, 0);
        }
    }
}
