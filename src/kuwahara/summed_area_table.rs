use super::window::Rect;
use image::Primitive;

/// Summed-area table (integral image) over one channel
///
/// `sat(x, y)` holds the sum of all values in the rectangle from the origin
/// to `(x, y)` inclusive, so any rectangle sum takes four lookups.
pub struct SummedAreaTable<T> {
    data: Vec<T>,
    width: u32,
    height: u32,
}

impl<T> SummedAreaTable<T>
where
    T: Primitive,
{
    /// Builds the table from row-major channel values
    ///
    /// `data` must hold exactly `width * height` values.
    pub fn from_data(data: &[T], width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);

        let stride = width as usize;
        let mut sat_data = vec![T::zero(); data.len()];
        if stride == 0 {
            return Self {
                data: sat_data,
                width,
                height,
            };
        }

        for (y, row) in data.chunks_exact(stride).enumerate() {
            // sat(x, y) = row prefix sum + sat(x, y-1)
            let mut running = T::zero();
            for (x, &value) in row.iter().enumerate() {
                running = running + value;
                let above = if y > 0 {
                    sat_data[(y - 1) * stride + x]
                } else {
                    T::zero()
                };
                sat_data[y * stride + x] = running + above;
            }
        }

        Self {
            data: sat_data,
            width,
            height,
        }
    }

    /// Table value at `(x, y)`, or zero for coordinates left of or above the image
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> T {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            T::zero()
        } else {
            self.data[y as usize * self.width as usize + x as usize]
        }
    }

    /// Sum of all values inside `rect`
    ///
    /// Sum = sat(x2, y2) - sat(x1-1, y2) - sat(x2, y1-1) + sat(x1-1, y1-1)
    #[must_use]
    pub fn rectangle_sum(&self, rect: Rect) -> T {
        let (x1, y1) = (i64::from(rect.x1), i64::from(rect.y1));
        let (x2, y2) = (i64::from(rect.x2), i64::from(rect.y2));

        let bottom_right = self.get(x2, y2);
        let top_right = self.get(x2, y1 - 1);
        let bottom_left = self.get(x1 - 1, y2);
        let top_left = self.get(x1 - 1, y1 - 1);

        // Added before subtracting so unsigned values never underflow
        bottom_right + top_left - top_right - bottom_left
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}
