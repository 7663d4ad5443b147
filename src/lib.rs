//! Edge-preserving Kuwahara smoothing for raster images.
//!
//! The [`Kuwahara`] trait filters any 8-bit [`Image`]; the [`io`] module
//! decodes and encodes images around it and [`cli`] wires both into the
//! `kuwahara` command.

pub mod cli;
mod error;
pub mod io;
mod kuwahara;

#[cfg(test)]
mod test_utils;

pub use error::{Error, ImageIoError, KuwaharaError};
pub use kuwahara::{
    candidates, IntegralSampler, Kuwahara, KuwaharaOptions, Method, NaiveSampler, Quadrant,
    QuadrantSampler, QuadrantStats, Rect, SummedAreaTable, Window, WindowPolicy,
};

pub use imageproc::definitions::Image;
