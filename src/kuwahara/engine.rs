use super::integral::IntegralSampler;
use super::naive::NaiveSampler;
use super::quadrant::{QuadrantSampler, QuadrantStats};
use super::window::{candidates, Rect, Window};
use super::{KuwaharaOptions, Method};
use crate::error::KuwaharaError;
use crate::Image;
use image::{Pixel, Rgba};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::debug;

const CHANNELS: usize = 4;

/// Validates the input and filters every pixel into a new RGBA image
pub(crate) fn apply<P>(
    image: &Image<P>,
    options: &KuwaharaOptions,
) -> Result<Image<Rgba<u8>>, KuwaharaError>
where
    P: Pixel<Subpixel = u8> + Sync,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(KuwaharaError::EmptyImage { width, height });
    }

    let window = Window::new(options.window, options.policy)?;

    debug!(
        width,
        height,
        window = window.size(),
        quadrant_size = window.quadrant_size(),
        method = ?options.method,
        "applying kuwahara filter"
    );
    if !window.fits(width, height) {
        debug!("image is narrower than the window reach; clipped quadrants used where none fit");
    }

    let output = match options.method {
        Method::Naive => filter_image(&NaiveSampler::new(image), width, height, window),
        Method::SummedAreaTable => {
            filter_image(&IntegralSampler::new(image), width, height, window)
        }
    };

    Ok(output)
}

/// Fills the output one row at a time; each row is owned by exactly one task
fn filter_image<S>(sampler: &S, width: u32, height: u32, window: Window) -> Image<Rgba<u8>>
where
    S: QuadrantSampler + Sync,
{
    let q = window.quadrant_size();
    let row_len = width as usize * CHANNELS;
    let mut output: Image<Rgba<u8>> = Image::new(width, height);
    let samples: &mut [u8] = &mut output;

    #[cfg(feature = "rayon")]
    samples
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| filter_row(sampler, row, y as u32, q, width, height));

    #[cfg(not(feature = "rayon"))]
    samples
        .chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| filter_row(sampler, row, y as u32, q, width, height));

    output
}

fn filter_row<S: QuadrantSampler>(
    sampler: &S,
    row: &mut [u8],
    y: u32,
    q: u32,
    width: u32,
    height: u32,
) {
    for (x, pixel) in (0..width).zip(row.chunks_exact_mut(CHANNELS)) {
        pixel.copy_from_slice(&filter_pixel(sampler, x, y, q, width, height).0);
    }
}

/// Mean color of the lowest-variance candidate quadrant around `(x, y)`
///
/// Ties go to the first candidate in NW, NE, SW, SE order.
pub(crate) fn filter_pixel<S: QuadrantSampler>(
    sampler: &S,
    x: u32,
    y: u32,
    q: u32,
    width: u32,
    height: u32,
) -> Rgba<u8> {
    candidates(x, y, q, width, height)
        .into_iter()
        .flatten()
        .map(|rect| sampler.stats(rect))
        .min_by(QuadrantStats::cmp_variance)
        .unwrap_or_else(|| sampler.stats(Rect::point(x, y)))
        .mean
}
