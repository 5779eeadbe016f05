//! Borrowed input tiles and owned RGBA output images.

use rgb::{ComponentBytes, RGBA8};
use crate::error::{ColormapError, Result};

/// Numeric types a raster tile can hold.
pub trait Sample: Copy + PartialEq + Send + Sync + 'static {
    /// The sample as a real number (possibly rounded for 64-bit
    /// integers beyond 2^53).
    fn to_f64(self) -> f64;

    /// Whether the sample holds a valid value, i.e. is neither the
    /// sentinel `nodata` nor a floating-point NaN.
    #[inline]
    fn is_valid(self, nodata: Self) -> bool {
        self != nodata && !self.to_f64().is_nan()
    }
}

macro_rules! impl_sample {
    ($($t: ty),*) => { $(
        impl Sample for $t {
            #[inline]
            fn to_f64(self) -> f64 { self as f64 }
        }
    )* }
}

impl_sample!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// A read-only `width × height` grid of values in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct Tile<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T> Tile<'a, T> {
    /// View `data` as a tile.  `data.len()` must equal `width * height`.
    pub fn new(data: &'a [T], width: usize, height: usize) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(ColormapError::InvalidBuffer {
                width, height, len: data.len() });
        }
        Ok(Tile { data, width, height })
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// `(width, height)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) { (self.width, self.height) }

    #[inline]
    pub fn len(&self) -> usize { self.data.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// All values, row after row.
    #[inline]
    pub fn data(&self) -> &'a [T] { self.data }

    /// The value at column `x` of row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Row `y`.
    pub(crate) fn row(&self, y: usize) -> &'a [T] {
        &self.data[y * self.width .. (y + 1) * self.width]
    }

    /// Fail with [`ColormapError::ShapeMismatch`] unless `other` has the
    /// same shape.
    pub(crate) fn check_shape<U>(&self, other: &Tile<'_, U>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(ColormapError::ShapeMismatch {
                expected: self.shape(), found: other.shape() });
        }
        Ok(())
    }
}

/// An RGBA image, the same shape as the tile it was rendered from.
///
/// Alpha is either 0 (no data) or 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<RGBA8>,
}

impl RgbaImage {
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<RGBA8>)
                              -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        RgbaImage { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// `(width, height)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) { (self.width, self.height) }

    /// All pixels, row after row.
    #[inline]
    pub fn pixels(&self) -> &[RGBA8] { &self.pixels }

    /// The pixel at column `x` of row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<RGBA8> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// The pixels as `r, g, b, a` bytes, ready for an image encoder.
    pub fn as_bytes(&self) -> &[u8] { self.pixels.as_bytes() }

    /// Consume the image, returning its `r, g, b, a` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect()
    }
}
