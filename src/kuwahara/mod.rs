//! Kuwahara filter: edge-preserving smoothing by minimum-variance quadrants.
//!
//! For each pixel the four overlapping `q`x`q` quadrants of a `window`x`window`
//! neighborhood (`q = window / 2 + 1`) are examined, and the pixel is replaced
//! by the mean color of the quadrant with the lowest color variance.

mod engine;
mod integral;
mod naive;
mod quadrant;
mod summed_area_table;
mod window;

pub use integral::IntegralSampler;
pub use naive::NaiveSampler;
pub use quadrant::{QuadrantSampler, QuadrantStats};
pub use summed_area_table::SummedAreaTable;
pub use window::{candidates, Quadrant, Rect, Window, WindowPolicy};

use crate::error::KuwaharaError;
use crate::Image;
use image::{DynamicImage, Pixel, Rgba};

/// How quadrant statistics are computed
///
/// Both methods produce identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Reads every quadrant pixel twice, `O(window²)` per pixel
    Naive,
    /// Uses integral images of sums and squared sums, `O(1)` per pixel
    /// after an `O(width * height)` setup
    #[default]
    SummedAreaTable,
}

/// Parameters of a Kuwahara filter run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KuwaharaOptions {
    /// Side length of the square neighborhood; should be odd
    pub window: u32,
    /// Treatment of even window sizes
    pub policy: WindowPolicy,
    /// Statistics backend
    pub method: Method,
}

impl KuwaharaOptions {
    /// Lenient options using summed-area tables
    #[must_use]
    pub const fn new(window: u32) -> Self {
        Self {
            window,
            policy: WindowPolicy::Lenient,
            method: Method::SummedAreaTable,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

/// Kuwahara filtering for 8-bit images
///
/// Input pixels are read as RGBA; the output is always `Rgba<u8>` with the
/// same dimensions as the input and every alpha set to 255.
///
/// # Examples
///
/// ```rust
/// use imageops_kuwahara::{Image, Kuwahara};
/// use image::Rgba;
///
/// let image: Image<Rgba<u8>> = Image::from_pixel(5, 5, Rgba([128, 128, 128, 255]));
/// let filtered = image.kuwahara(3).unwrap();
/// assert_eq!(filtered, image);
/// ```
pub trait Kuwahara {
    /// Filters with the given window size and default options
    ///
    /// # Errors
    ///
    /// * `KuwaharaError::EmptyImage` - If the image has zero width or height
    /// * `KuwaharaError::InvalidWindow` - If `window` is zero
    fn kuwahara(&self, window: u32) -> Result<Image<Rgba<u8>>, KuwaharaError> {
        self.kuwahara_with(&KuwaharaOptions::new(window))
    }

    /// Filters with explicit options
    ///
    /// # Errors
    ///
    /// * `KuwaharaError::EmptyImage` - If the image has zero width or height
    /// * `KuwaharaError::InvalidWindow` - If the window size is zero
    /// * `KuwaharaError::EvenWindow` - If the window size is even under
    ///   [`WindowPolicy::Strict`]
    fn kuwahara_with(&self, options: &KuwaharaOptions) -> Result<Image<Rgba<u8>>, KuwaharaError>;
}

impl<P> Kuwahara for Image<P>
where
    P: Pixel<Subpixel = u8> + Sync,
{
    fn kuwahara_with(&self, options: &KuwaharaOptions) -> Result<Image<Rgba<u8>>, KuwaharaError> {
        engine::apply(self, options)
    }
}

impl Kuwahara for DynamicImage {
    fn kuwahara_with(&self, options: &KuwaharaOptions) -> Result<Image<Rgba<u8>>, KuwaharaError> {
        match self {
            Self::ImageLuma8(image) => image.kuwahara_with(options),
            Self::ImageLumaA8(image) => image.kuwahara_with(options),
            Self::ImageRgb8(image) => image.kuwahara_with(options),
            Self::ImageRgba8(image) => image.kuwahara_with(options),
            other => other.to_rgba8().kuwahara_with(options),
        }
    }
}
