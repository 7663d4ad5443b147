use crate::error::KuwaharaError;
use tracing::warn;

/// How even window sizes are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowPolicy {
    /// Warn about an even window and filter with it anyway
    #[default]
    Lenient,
    /// Reject an even window with [`KuwaharaError::EvenWindow`]
    Strict,
}

/// Validated side length of the square neighborhood around each pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    size: u32,
}

impl Window {
    /// Validates a window size against the given policy
    ///
    /// # Errors
    ///
    /// * `KuwaharaError::InvalidWindow` - If `size` is zero
    /// * `KuwaharaError::EvenWindow` - If `size` is even and `policy` is strict
    pub fn new(size: u32, policy: WindowPolicy) -> Result<Self, KuwaharaError> {
        if size == 0 {
            return Err(KuwaharaError::InvalidWindow { window: size });
        }

        if size % 2 == 0 {
            match policy {
                WindowPolicy::Strict => return Err(KuwaharaError::EvenWindow { window: size }),
                WindowPolicy::Lenient => {
                    warn!(
                        window = size,
                        quadrant_size = size / 2 + 1,
                        "window size should be odd; filtering with it anyway"
                    );
                }
            }
        }

        Ok(Self { size })
    }

    /// Side length of the window
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Side length `q` of each of the four overlapping quadrants
    #[must_use]
    pub const fn quadrant_size(self) -> u32 {
        self.size / 2 + 1
    }

    /// Returns `true` if no pixel of a `width`x`height` image can run out of
    /// fully contained quadrants
    #[must_use]
    pub const fn fits(self, width: u32, height: u32) -> bool {
        let reach = 2 * (self.quadrant_size() as u64 - 1);
        width as u64 >= reach && height as u64 >= reach
    }
}

/// Inclusive pixel rectangle lying inside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Rect {
    /// Single-pixel rectangle
    #[must_use]
    pub const fn point(x: u32, y: u32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    /// Number of pixels covered
    #[must_use]
    pub const fn area(self) -> u64 {
        (self.x2 - self.x1 + 1) as u64 * (self.y2 - self.y1 + 1) as u64
    }
}

/// One of the four quadrants sharing the center pixel as a corner
///
/// The declaration order is the selection priority used when variances tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Center pixel is the bottom-right corner
    NorthWest,
    /// Center pixel is the bottom-left corner
    NorthEast,
    /// Center pixel is the top-right corner
    SouthWest,
    /// Center pixel is the top-left corner
    SouthEast,
}

impl Quadrant {
    /// All quadrants in tie-break priority order
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Unclipped inclusive extent `(x1, y1, x2, y2)` of a `q`x`q` quadrant
    /// around `(x, y)`; may reach outside the image
    const fn extent(self, x: u32, y: u32, q: u32) -> (i64, i64, i64, i64) {
        let (x, y, reach) = (x as i64, y as i64, q as i64 - 1);
        match self {
            Self::NorthWest => (x - reach, y - reach, x, y),
            Self::NorthEast => (x, y - reach, x + reach, y),
            Self::SouthWest => (x - reach, y, x, y + reach),
            Self::SouthEast => (x, y, x + reach, y + reach),
        }
    }

    /// The quadrant's rectangle, if it lies entirely inside a `width`x`height` image
    #[must_use]
    pub fn eligible(self, x: u32, y: u32, q: u32, width: u32, height: u32) -> Option<Rect> {
        let (x1, y1, x2, y2) = self.extent(x, y, q);
        let inside = x1 >= 0 && y1 >= 0 && x2 < i64::from(width) && y2 < i64::from(height);

        inside.then(|| Rect {
            x1: x1 as u32,
            y1: y1 as u32,
            x2: x2 as u32,
            y2: y2 as u32,
        })
    }

    /// The quadrant's rectangle clipped to a `width`x`height` image
    ///
    /// Never empty, since every quadrant contains the center pixel.
    #[must_use]
    pub fn clipped(self, x: u32, y: u32, q: u32, width: u32, height: u32) -> Rect {
        let (x1, y1, x2, y2) = self.extent(x, y, q);
        let max_x = i64::from(width) - 1;
        let max_y = i64::from(height) - 1;

        Rect {
            x1: x1.clamp(0, max_x) as u32,
            y1: y1.clamp(0, max_y) as u32,
            x2: x2.clamp(0, max_x) as u32,
            y2: y2.clamp(0, max_y) as u32,
        }
    }
}

/// Candidate rectangles for the pixel at `(x, y)` in priority order
///
/// Only fully contained quadrants compete. If none is contained, all four
/// quadrants compete clipped to the image bounds.
#[must_use]
pub fn candidates(x: u32, y: u32, q: u32, width: u32, height: u32) -> [Option<Rect>; 4] {
    let eligible = Quadrant::ALL.map(|quadrant| quadrant.eligible(x, y, q, width, height));

    if eligible.iter().any(Option::is_some) {
        eligible
    } else {
        Quadrant::ALL.map(|quadrant| Some(quadrant.clipped(x, y, q, width, height)))
    }
}
