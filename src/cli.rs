//! Command-line interface: decode, filter, encode.

use std::path::PathBuf;
use std::time::Instant;

use crate::error::Error;
use crate::{io, Kuwahara, KuwaharaOptions, Method, WindowPolicy};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

/// Window size used when none is given
pub const DEFAULT_WINDOW: u32 = 11;

#[derive(Parser, Debug)]
#[command(name = "kuwahara")]
#[command(author, version, about = "Apply an edge-preserving Kuwahara filter to an image")]
pub struct Cli {
    /// Input PNG or JPEG image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG image
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Window size of the filter, odd number
    #[arg(value_name = "WINDOW", default_value_t = DEFAULT_WINDOW)]
    pub window: u32,

    /// Reject even window sizes instead of warning
    #[arg(long)]
    pub strict: bool,

    /// How quadrant statistics are computed
    #[arg(short, long, value_enum, default_value_t = MethodArg::SummedAreaTable)]
    pub method: MethodArg,

    /// Log per-stage details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodArg {
    Naive,
    SummedAreaTable,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Naive => Self::Naive,
            MethodArg::SummedAreaTable => Self::SummedAreaTable,
        }
    }
}

impl Cli {
    /// Maximum log level implied by `--verbose` / `--quiet`
    #[must_use]
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Filter options implied by the arguments
    #[must_use]
    pub fn options(&self) -> KuwaharaOptions {
        let policy = if self.strict {
            WindowPolicy::Strict
        } else {
            WindowPolicy::Lenient
        };

        KuwaharaOptions::new(self.window)
            .with_policy(policy)
            .with_method(self.method.into())
    }
}

/// Runs the decode, filter, encode pipeline
///
/// Nothing is written to the output path unless every stage succeeds.
///
/// # Errors
///
/// Returns the first decode, validation, or encode error encountered.
pub fn run(cli: &Cli) -> Result<(), Error> {
    let start = Instant::now();
    let image = io::open(&cli.input)?;
    let (width, height) = image.dimensions();
    info!(
        input = %cli.input.display(),
        width,
        height,
        elapsed = ?start.elapsed(),
        "loaded image"
    );

    let start = Instant::now();
    let filtered = image.kuwahara_with(&cli.options())?;
    info!(
        window = cli.window,
        method = ?cli.method,
        elapsed = ?start.elapsed(),
        "filtered image"
    );

    let start = Instant::now();
    io::save_png(&filtered, &cli.output)?;
    info!(
        output = %cli.output.display(),
        elapsed = ?start.elapsed(),
        "saved image"
    );

    Ok(())
}
