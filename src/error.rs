use std::path::PathBuf;

use thiserror::Error;

/// Error type for the Kuwahara filter
///
/// Every variant describes invalid input: the filter either produces a
/// complete output image or fails before any pixel is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KuwaharaError {
    /// The input image has a zero width or height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Width of the rejected image
        width: u32,
        /// Height of the rejected image
        height: u32,
    },

    /// The window size is not a positive integer
    #[error("Window size must be at least 1, got {window}")]
    InvalidWindow {
        /// The rejected window size
        window: u32,
    },

    /// The window size is even and strict validation was requested
    ///
    /// With the default lenient policy an even window only produces a
    /// warning and filtering proceeds.
    #[error("Window size must be odd, got {window}")]
    EvenWindow {
        /// The rejected window size
        window: u32,
    },
}

impl KuwaharaError {
    /// Returns `true` if the error was caused by invalid caller input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyImage { .. } | Self::InvalidWindow { .. } | Self::EvenWindow { .. }
        )
    }
}

/// Error type for decoding and encoding images
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// The input file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image data is malformed or in an unsupported format
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The image could not be encoded
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// The encoded image could not be written
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for the decode, filter, encode pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Filtering failed
    #[error(transparent)]
    Kuwahara(#[from] KuwaharaError),

    /// Decoding or encoding failed
    #[error(transparent)]
    Io(#[from] ImageIoError),
}
