//! Test utilities for imageops-kuwahara
//!
//! Shared fixtures for the unit tests. Only compiled when running tests.

use crate::Image;
use image::{Rgb, Rgba};

/// Creates a 2x2 RGBA image with known pixel values:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
///
/// The alpha values check that the filter ignores source alpha.
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates an image split vertically at `split` into two solid colors
pub fn create_two_tone_image(
    width: u32,
    height: u32,
    split: u32,
    left: Rgb<u8>,
    right: Rgb<u8>,
) -> Image<Rgb<u8>> {
    Image::from_fn(width, height, |x, _| if x < split { left } else { right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kuwahara;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn two_tone_edge_survives_filtering() {
        let black = Rgb([0, 0, 0]);
        let white = Rgb([255, 255, 255]);
        let image = create_two_tone_image(10, 6, 5, black, white);

        let filtered = image.kuwahara(5).unwrap();
        for y in 0..6 {
            assert_eq!(filtered.get_pixel(4, y), &Rgba([0, 0, 0, 255]));
            assert_eq!(filtered.get_pixel(5, y), &Rgba([255, 255, 255, 255]));
        }
    }
}
