//! Continuous color ramps used to expand palette definitions to
//! [`PALETTE_SIZE`](crate::PALETTE_SIZE) entries.
//!
//! - [`Gradient`]: between two colors, interpolated in CIE L\*C\*h;
//! - [`MultiGradient`]: through a list of anchor colors;
//! - [`Segments`]: per-channel piecewise-linear RGB.

use std::f64::consts::PI;
use rgb::{RGB, RGB8};
use crate::stretch::Samples;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> RGB8;

    /// Return an iterator yielding `n` colors uniformly sampled from
    /// `t = 0` to `t = 1` (both included).
    fn range(&self, n: usize) -> Range<'_, Self>
    where Self: Sized {
        Range { range: self, samples: Samples::new(0., 1., n) }
    }
}

/// An iterator over uniformly sampled colors of a [`ColorRange`].
pub struct Range<'a, R> {
    range: &'a R,
    samples: Samples,
}

impl<R: ColorRange> Iterator for Range<'_, R> {
    type Item = RGB8;

    fn next(&mut self) -> Option<RGB8> {
        self.samples.next().map(|(_, t)| self.range.rgb(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl<R: ColorRange> ExactSizeIterator for Range<'_, R> {}

#[inline]
fn to_f64(c: RGB8) -> RGB<f64> {
    RGB { r: c.r as f64, g: c.g as f64, b: c.b as f64 }
}

#[inline]
fn channel(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

#[inline]
fn from_f64(c: RGB<f64>) -> RGB8 {
    RGB8 { r: channel(c.r), g: channel(c.g), b: channel(c.b) }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point.  This color space is CIE L*a*b* with polar
/// coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGB<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h }
    }

    fn to_rgb(self) -> RGB<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b = self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGB { r, g, b }
    }
}

/// Gradient between two colors.
pub struct Gradient {
    c0: Lch, // first color
    dc: Lch, // last - first color
}

impl Gradient {
    /// Return a gradient from color `c0` to color `c1`, going the short
    /// way around the hue circle.
    pub fn new(c0: RGB8, c1: RGB8) -> Self {
        let lch0 = Lch::from_rgb(to_f64(c0));
        let lch1 = Lch::from_rgb(to_f64(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c, h: dh } }
    }

    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unchecked(&self, t: f64) -> RGB8 {
        let lch = Lch { l: self.c0.l + t * self.dc.l,
                        c: self.c0.c + t * self.dc.c,
                        h: self.c0.h + t * self.dc.h };
        from_f64(lch.to_rgb())
    }
}

impl ColorRange for Gradient {
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> RGB8 { self.rgb_unchecked(t.clamp(0., 1.)) }
}

/// A gradient going through a list of (at least two) equally spaced
/// anchor colors.
pub struct MultiGradient {
    gradients: Vec<Gradient>,
}

impl MultiGradient {
    /// Returns `None` if fewer than two anchors are given.
    pub fn new(anchors: &[RGB8]) -> Option<Self> {
        if anchors.len() < 2 {
            return None;
        }
        let gradients = anchors.windows(2)
            .map(|c| Gradient::new(c[0], c[1]))
            .collect();
        Some(MultiGradient { gradients })
    }
}

impl ColorRange for MultiGradient {
    fn rgb(&self, t: f64) -> RGB8 {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unchecked(tn.fract()) }
        else { self.gradients[n-1].rgb_unchecked(1.) }
    }
}

/// Per-channel piecewise-linear ramp.  Each channel is a list of
/// `(x, y)` control points with `x` increasing from 0 to 1 and `y` ∈
/// \[0, 1\].
#[derive(Clone, Copy)]
pub struct Segments<'a> {
    pub red: &'a [(f64, f64)],
    pub green: &'a [(f64, f64)],
    pub blue: &'a [(f64, f64)],
}

fn interpolate(points: &[(f64, f64)], t: f64) -> f64 {
    let (Some(&(x0, y0)), Some(&(xn, yn))) = (points.first(), points.last())
    else { return 0. };
    if t <= x0 {
        return y0;
    }
    if t >= xn {
        return yn;
    }
    for w in points.windows(2) {
        let (xa, ya) = w[0];
        let (xb, yb) = w[1];
        if t <= xb {
            if xb <= xa { return yb }
            return ya + (t - xa) / (xb - xa) * (yb - ya);
        }
    }
    yn
}

impl ColorRange for Segments<'_> {
    fn rgb(&self, t: f64) -> RGB8 {
        let t = t.clamp(0., 1.);
        RGB8 { r: channel(255. * interpolate(self.red, t)),
               g: channel(255. * interpolate(self.green, t)),
               b: channel(255. * interpolate(self.blue, t)) }
    }
}
