//! Stretch ranges and the value → palette index normalizer.
//!
//! [`normalize`] is the single place where stretch arithmetic happens.
//! Both the colormap table and the tile colorizer go through it (via
//! [`Palette::color_of`](crate::Palette::color_of)), which is what keeps
//! rendered pixels and legend entries identical.

use serde::{Deserialize, Serialize};
use crate::error::{ColormapError, Result};

/// Palette index reserved for no-data.  Valid samples never map here.
pub const NODATA_INDEX: u8 = 0;
/// Index of the lowest color a valid sample can take.
pub const MIN_INDEX: u8 = 1;
/// Index of the highest color a valid sample can take.
pub const MAX_INDEX: u8 = 255;

/// Inclusive interval `[low, high]` mapped onto the color ramp.
///
/// Both bounds are finite and `low <= high`.  On the wire it is a
/// `[low, high]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct StretchRange {
    low: f64,
    high: f64,
}

impl StretchRange {
    /// Create a stretch range, rejecting non-finite bounds and
    /// `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ColormapError::InvalidRange(format!(
                "stretch bounds must be finite, got [{low}, {high}]")));
        }
        if low > high {
            return Err(ColormapError::InvalidRange(format!(
                "lower bound {low} exceeds upper bound {high}")));
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn low(&self) -> f64 { self.low }

    #[inline]
    pub fn high(&self) -> f64 { self.high }

    /// Whether `low == high`.
    #[inline]
    pub fn is_degenerate(&self) -> bool { self.low == self.high }

    /// Palette index of `value` under this stretch.  See [`normalize`].
    #[inline]
    pub fn index(&self, value: f64) -> u8 { normalize(value, self.low, self.high) }

    /// `n` evenly spaced values from `low` to `high`, both included.
    pub fn samples(&self, n: usize) -> Samples {
        Samples::new(self.low, self.high, n)
    }
}

impl TryFrom<[f64; 2]> for StretchRange {
    type Error = ColormapError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self> {
        Self::new(low, high)
    }
}

impl From<StretchRange> for [f64; 2] {
    fn from(r: StretchRange) -> Self { [r.low, r.high] }
}

/// Map `value` onto a palette index for the stretch `[low, high]`.
///
/// - `NaN` gives [`NODATA_INDEX`];
/// - `value <= low` gives [`MIN_INDEX`];
/// - `value >= high` gives [`MAX_INDEX`];
/// - otherwise the value is scaled linearly onto `[1, 255]` and rounded
///   half to even.
///
/// The `value <= low` test comes first, so for a degenerate range
/// (`low == high`) the single point maps to [`MIN_INDEX`] and anything
/// strictly above it to [`MAX_INDEX`].
#[inline]
pub fn normalize(value: f64, low: f64, high: f64) -> u8 {
    if value.is_nan() {
        return NODATA_INDEX;
    }
    if value <= low {
        return MIN_INDEX;
    }
    if value >= high {
        return MAX_INDEX;
    }
    // `high - low` may overflow even though both bounds are finite.
    let ratio = if (high - low).is_finite() {
        (value - low) / (high - low)
    } else {
        (value / 2. - low / 2.) / (high / 2. - low / 2.)
    };
    let span = f64::from(MAX_INDEX - MIN_INDEX);
    let x = ratio * span + f64::from(MIN_INDEX);
    x.round_ties_even()
        .clamp(f64::from(MIN_INDEX), f64::from(MAX_INDEX)) as u8
}

/// An iterator yielding `n` evenly spaced values between `a` and `b`
/// (both included) together with their relative position `t` ∈ \[0, 1\].
///
/// The end points are returned exactly, and interior points are
/// computed as `((n-1-k)·a + k·b) / (n-1)`, so that integer bounds
/// sampled at `n = b - a + 1` yield exact integers.
#[derive(Debug, Clone)]
pub struct Samples {
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j unless empty)
    j: usize, // last position to be consumed
}

impl Samples {
    pub(crate) fn new(a: f64, b: f64, n: usize) -> Self {
        if n == 0 {
            Samples { a, b, flast: 0., last: 0, i: 1, j: 0 } // Empty
        } else {
            Samples { a, b, flast: (n - 1) as f64, last: n - 1,
                      i: 0, j: n - 1 }
        }
    }

    /// Value and relative position of the sample `k` (assuming it is
    /// in `0 ..= self.last`).
    fn point(&self, k: usize) -> (f64, f64) {
        if k == 0 {
            (self.a, 0.)
        } else if k == self.last {
            (self.b, 1.)
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if !x.is_finite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, t)
        }
    }
}

impl Iterator for Samples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.point(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Samples {}

impl DoubleEndedIterator for Samples {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.point(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_at_bounds() {
        assert_eq!(normalize(-5., 0., 10.), MIN_INDEX);
        assert_eq!(normalize(0., 0., 10.), MIN_INDEX);
        assert_eq!(normalize(10., 0., 10.), MAX_INDEX);
        assert_eq!(normalize(1e300, 0., 10.), MAX_INDEX);
        assert_eq!(normalize(f64::NEG_INFINITY, 0., 10.), MIN_INDEX);
    }

    #[test]
    fn interior_values_are_scaled_onto_1_255() {
        // 0.5 * 254 + 1 = 128
        assert_eq!(normalize(5., 0., 10.), 128);
        // 0.25 * 254 + 1 = 64.5, ties to even
        assert_eq!(normalize(2.5, 0., 10.), 64);
        // 0.75 * 254 + 1 = 191.5, ties to even
        assert_eq!(normalize(7.5, 0., 10.), 192);
        assert_eq!(normalize(1e-9, 0., 10.), MIN_INDEX);
    }

    #[test]
    fn degenerate_range() {
        assert_eq!(normalize(3., 3., 3.), MIN_INDEX);
        assert_eq!(normalize(2., 3., 3.), MIN_INDEX);
        assert_eq!(normalize(3.000001, 3., 3.), MAX_INDEX);
    }

    #[test]
    fn huge_ranges_do_not_overflow() {
        let (low, high) = (-1e308, 1e308);
        assert_eq!(normalize(0., low, high), 128);
        // 0.95 * 254 + 1 = 242.3
        assert_eq!(normalize(9e307, low, high), 242);
        // 0.05 * 254 + 1 = 13.7
        assert_eq!(normalize(-9e307, low, high), 14);
        let range = StretchRange::new(f64::MIN, f64::MAX).unwrap();
        assert_eq!(range.index(0.), 128);
        assert!(range.samples(1000).all(|(v, _)| v.is_finite()));
        assert!(range.samples(1000).map(|(v, _)| range.index(v))
                .all(|i| (MIN_INDEX ..= MAX_INDEX).contains(&i)));
    }

    #[test]
    fn nan_maps_to_reserved_index() {
        assert_eq!(normalize(f64::NAN, 0., 1.), NODATA_INDEX);
    }

    #[test]
    fn range_validation() {
        assert!(StretchRange::new(0., 1.).is_ok());
        assert!(StretchRange::new(1., 1.).unwrap().is_degenerate());
        assert!(matches!(StretchRange::new(2., 1.),
                         Err(ColormapError::InvalidRange(_))));
        assert!(StretchRange::new(f64::NAN, 1.).is_err());
        assert!(StretchRange::new(0., f64::INFINITY).is_err());
    }

    #[test]
    fn samples_hit_end_points() {
        let s: Vec<_> = StretchRange::new(-1., 3.).unwrap().samples(5)
            .map(|(x, _)| x).collect();
        assert_eq!(s, vec![-1., 0., 1., 2., 3.]);
        for (i, (x, t)) in Samples::new(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(x, t);
        }
    }

    #[test]
    fn samples_of_integer_span_are_exact() {
        let r = StretchRange::new(-50000., 50000.).unwrap();
        for (k, (x, _)) in r.samples(100001).enumerate() {
            assert_eq!(x, -50000. + k as f64);
        }
    }

    #[test]
    fn samples_len_and_reverse() {
        let mut s = Samples::new(0., 1., 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.next_back(), Some((1., 1.)));
        assert_eq!(s.next(), Some((0., 0.)));
        assert_eq!(s.len(), 2);
        assert_eq!(Samples::new(0., 1., 0).count(), 0);
        assert_eq!(Samples::new(2., 5., 1).collect::<Vec<_>>(), vec![(2., 0.)]);
    }

    #[test]
    fn deserializes_from_pair() {
        let r: StretchRange = serde_json::from_str("[20000, 30000]").unwrap();
        assert_eq!((r.low(), r.high()), (20000., 30000.));
        assert!(serde_json::from_str::<StretchRange>("[3, 1]").is_err());
    }
}
