//! Decoding input images and encoding filtered output.

use std::io::Cursor;
use std::path::Path;

use crate::error::ImageIoError;
use crate::Image;
use image::{ImageFormat, Rgba};
use tracing::debug;

/// Decodes PNG or JPEG data into an RGBA image
///
/// # Errors
///
/// * `ImageIoError::Decode` - If the data is malformed or in an unsupported format
pub fn decode(bytes: &[u8]) -> Result<Image<Rgba<u8>>, ImageIoError> {
    let image = image::load_from_memory(bytes).map_err(ImageIoError::Decode)?;
    debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );
    Ok(image.to_rgba8())
}

/// Reads and decodes an image file
///
/// # Errors
///
/// * `ImageIoError::Read` - If the file cannot be read
/// * `ImageIoError::Decode` - If its contents cannot be decoded
pub fn open(path: impl AsRef<Path>) -> Result<Image<Rgba<u8>>, ImageIoError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ImageIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}

/// Encodes an image as PNG in memory
///
/// # Errors
///
/// * `ImageIoError::Encode` - If the PNG encoder rejects the image
pub fn encode_png(image: &Image<Rgba<u8>>) -> Result<Vec<u8>, ImageIoError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(ImageIoError::Encode)?;
    Ok(buffer.into_inner())
}

/// Encodes an image as PNG and writes it to `path`
///
/// Encoding completes before the file is created, so a failed encode
/// leaves no file behind.
///
/// # Errors
///
/// * `ImageIoError::Encode` - If encoding fails
/// * `ImageIoError::Write` - If the file cannot be written
pub fn save_png(image: &Image<Rgba<u8>>, path: impl AsRef<Path>) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    let encoded = encode_png(image)?;
    std::fs::write(path, &encoded).map_err(|source| ImageIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = encoded.len(), "wrote png");
    Ok(())
}
