//! Rendering of raster tiles to RGBA images.

use rgb::RGBA8;
use tracing::debug;
use crate::error::Result;
use crate::palette::Palette;
use crate::registry::PaletteRegistry;
use crate::settings::{Settings, DEFAULT_PARALLEL_THRESHOLD};
use crate::stretch::StretchRange;
use crate::tile::{RgbaImage, Sample, Tile};

/// Color of a pixel without data.
pub const TRANSPARENT: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 0 };

/// Renders tiles with the palettes of a registry.
///
/// Every pixel is handled independently, so rows of large tiles are
/// processed in parallel when the `parallel` feature is enabled.  The
/// output does not depend on whether that happens.
#[derive(Debug, Clone, Copy)]
pub struct TileColorizer<'r> {
    registry: &'r PaletteRegistry,
    parallel_threshold: usize,
}

#[cfg(feature = "parallel")]
fn fill_rows<F>(pixels: &mut [RGBA8], width: usize, parallel: bool, f: F)
where F: Fn(usize, &mut [RGBA8]) + Send + Sync {
    use rayon::prelude::*;
    if parallel {
        pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| f(y, row));
    } else {
        pixels.chunks_mut(width).enumerate().for_each(|(y, row)| f(y, row));
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<F>(pixels: &mut [RGBA8], width: usize, _parallel: bool, f: F)
where F: Fn(usize, &mut [RGBA8]) + Send + Sync {
    pixels.chunks_mut(width).enumerate().for_each(|(y, row)| f(y, row));
}

#[inline]
fn opaque(rgb: rgb::RGB8) -> RGBA8 {
    RGBA8 { r: rgb.r, g: rgb.g, b: rgb.b, a: 255 }
}

impl<'r> TileColorizer<'r> {
    pub fn new(registry: &'r PaletteRegistry) -> Self {
        TileColorizer { registry, parallel_threshold: DEFAULT_PARALLEL_THRESHOLD }
    }

    /// Take the parallelism threshold from `settings`.
    pub fn with_settings(registry: &'r PaletteRegistry, settings: &Settings)
                         -> Self {
        TileColorizer { registry, parallel_threshold: settings.parallel_threshold }
    }

    /// Render `width × height` pixels, `f` filling one row at a time.
    fn render<F>(&self, width: usize, height: usize, f: F) -> RgbaImage
    where F: Fn(usize, &mut [RGBA8]) + Send + Sync {
        let mut pixels = vec![TRANSPARENT; width * height];
        if !pixels.is_empty() {
            let parallel = pixels.len() >= self.parallel_threshold;
            debug!(width, height, parallel, "colorizing tile");
            fill_rows(&mut pixels, width, parallel, f);
        }
        RgbaImage::from_pixels(width, height, pixels)
    }

    fn map_row<T: Sample>(palette: &Palette, range: &StretchRange, nodata: T,
                          src: &[T], dst: &mut [RGBA8]) {
        for (out, &v) in dst.iter_mut().zip(src) {
            if v.is_valid(nodata) {
                *out = opaque(palette.color_of(v.to_f64(), range));
            }
        }
    }

    /// Color every pixel of `tile` with `palette` (the default palette
    /// for `None`) under `range`.
    ///
    /// Pixels equal to `nodata` (or NaN) are transparent, all others
    /// opaque; values outside of `range` take the color of the nearest
    /// bound.
    pub fn colorize<T: Sample>(&self, tile: &Tile<'_, T>, range: &StretchRange,
                               palette: Option<&str>, nodata: T)
                               -> Result<RgbaImage> {
        let palette = self.registry.resolve(palette)?;
        debug!(palette = palette.name(), low = range.low(), high = range.high(),
               "colorizing tile with palette");
        Ok(self.render(tile.width(), tile.height(), |y, row| {
            Self::map_row(palette, range, nodata, tile.row(y), row)
        }))
    }

    /// Like [`colorize`](Self::colorize), but pixels whose `mask` value
    /// is `false` are transparent as well.  The mask must have the
    /// shape of the tile.
    pub fn colorize_masked<T: Sample>(&self, tile: &Tile<'_, T>,
                                      mask: &Tile<'_, bool>,
                                      range: &StretchRange,
                                      palette: Option<&str>, nodata: T)
                                      -> Result<RgbaImage> {
        tile.check_shape(mask)?;
        let palette = self.registry.resolve(palette)?;
        debug!(palette = palette.name(), low = range.low(), high = range.high(),
               "colorizing masked tile with palette");
        Ok(self.render(tile.width(), tile.height(), |y, row| {
            Self::map_row(palette, range, nodata, tile.row(y), row);
            for (out, &valid) in row.iter_mut().zip(mask.row(y)) {
                if !valid {
                    *out = TRANSPARENT;
                }
            }
        }))
    }

    /// Compose three bands into an RGB image, each band stretched with
    /// its own range.  A channel holds the band's palette index
    /// (`1 ..= 255`); a pixel is transparent if any band lacks data.
    pub fn colorize_rgb<T: Sample>(&self, bands: [&Tile<'_, T>; 3],
                                   ranges: [StretchRange; 3], nodata: T)
                                   -> Result<RgbaImage> {
        let [red, green, blue] = bands;
        red.check_shape(green)?;
        red.check_shape(blue)?;
        Ok(self.render(red.width(), red.height(), |y, row| {
            let (r, g, b) = (red.row(y), green.row(y), blue.row(y));
            for (x, out) in row.iter_mut().enumerate() {
                let (vr, vg, vb) = (r[x], g[x], b[x]);
                if vr.is_valid(nodata) && vg.is_valid(nodata)
                    && vb.is_valid(nodata) {
                    *out = RGBA8 { r: ranges[0].index(vr.to_f64()),
                                   g: ranges[1].index(vg.to_f64()),
                                   b: ranges[2].index(vb.to_f64()),
                                   a: 255 };
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColormapError;

    fn range(low: f64, high: f64) -> StretchRange {
        StretchRange::new(low, high).unwrap()
    }

    #[test]
    fn nodata_is_transparent() {
        let registry = PaletteRegistry::builtin();
        let c = TileColorizer::new(&registry);
        let data = [0i32, 5, -1, 10, 20, -1];
        let tile = Tile::new(&data, 3, 2).unwrap();
        let img = c.colorize(&tile, &range(0., 10.), None, -1).unwrap();
        assert_eq!(img.shape(), (3, 2));
        assert_eq!(img.get(0, 0), Some(RGBA8::new(1, 1, 1, 255)));
        assert_eq!(img.get(1, 0), Some(RGBA8::new(128, 128, 128, 255)));
        assert_eq!(img.get(2, 0), Some(TRANSPARENT));
        assert_eq!(img.get(0, 1), Some(RGBA8::new(255, 255, 255, 255)));
        assert_eq!(img.get(1, 1), Some(RGBA8::new(255, 255, 255, 255)));
        assert_eq!(img.get(2, 1), Some(TRANSPARENT));
    }

    #[test]
    fn nan_is_transparent() {
        let registry = PaletteRegistry::builtin();
        let c = TileColorizer::new(&registry);
        let data = [f32::NAN, 0.5, -9999.];
        let tile = Tile::new(&data, 3, 1).unwrap();
        let img = c.colorize(&tile, &range(0., 1.), Some("viridis"), -9999.)
            .unwrap();
        let alpha: Vec<u8> = img.pixels().iter().map(|p| p.a).collect();
        assert_eq!(alpha, vec![0, 255, 0]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let registry = PaletteRegistry::builtin();
        let data: Vec<f64> = (0 .. 64 * 48).map(|i| (i % 300) as f64 - 20.)
            .collect();
        let tile = Tile::new(&data, 64, 48).unwrap();
        let r = range(0., 255.);
        let seq = TileColorizer::with_settings(
            &registry, &Settings { parallel_threshold: usize::MAX,
                                   ..Settings::default() });
        let par = TileColorizer::with_settings(
            &registry, &Settings { parallel_threshold: 1, ..Settings::default() });
        assert_eq!(seq.colorize(&tile, &r, Some("jet"), 7.).unwrap(),
                   par.colorize(&tile, &r, Some("jet"), 7.).unwrap());
    }

    #[test]
    fn empty_tile() {
        let registry = PaletteRegistry::builtin();
        let data: [u8; 0] = [];
        let tile = Tile::new(&data, 0, 4).unwrap();
        let img = TileColorizer::new(&registry)
            .colorize(&tile, &range(0., 1.), None, 0).unwrap();
        assert_eq!(img.shape(), (0, 4));
        assert!(img.pixels().is_empty());
    }

    #[test]
    fn unknown_palette_fails_up_front() {
        let registry = PaletteRegistry::builtin();
        let data = [1u8; 4];
        let tile = Tile::new(&data, 2, 2).unwrap();
        assert!(matches!(
            TileColorizer::new(&registry)
                .colorize(&tile, &range(0., 1.), Some("nope"), 0),
            Err(ColormapError::UnknownPalette { .. })));
    }

    #[test]
    fn mask_hides_pixels() {
        let registry = PaletteRegistry::builtin();
        let c = TileColorizer::new(&registry);
        let data = [1u8, 2, 3, 4];
        let mask = [true, false, true, true];
        let tile = Tile::new(&data, 2, 2).unwrap();
        let img = c.colorize_masked(&tile, &Tile::new(&mask, 2, 2).unwrap(),
                                    &range(1., 4.), None, 4).unwrap();
        let alpha: Vec<u8> = img.pixels().iter().map(|p| p.a).collect();
        assert_eq!(alpha, vec![255, 0, 255, 0]);

        let bad = Tile::new(&mask, 4, 1).unwrap();
        assert_eq!(c.colorize_masked(&tile, &bad, &range(1., 4.), None, 4)
                       .unwrap_err(),
                   ColormapError::ShapeMismatch { expected: (2, 2),
                                                  found: (4, 1) });
    }

    #[test]
    fn rgb_composite() {
        let registry = PaletteRegistry::builtin();
        let c = TileColorizer::new(&registry);
        let r = [0u16, 100, 50];
        let g = [100u16, 0, 50];
        let b = [0u16, 0, 9];
        let tiles = [Tile::new(&r, 3, 1).unwrap(), Tile::new(&g, 3, 1).unwrap(),
                     Tile::new(&b, 3, 1).unwrap()];
        let img = c.colorize_rgb([&tiles[0], &tiles[1], &tiles[2]],
                                 [range(0., 100.), range(0., 100.), range(0., 10.)],
                                 9).unwrap();
        assert_eq!(img.pixels(), &[RGBA8::new(1, 255, 1, 255),
                                   RGBA8::new(255, 1, 1, 255),
                                   TRANSPARENT]);

        let short = Tile::new(&b[..2], 2, 1).unwrap();
        assert!(matches!(
            c.colorize_rgb([&tiles[0], &tiles[1], &short],
                           [range(0., 1.); 3], 9),
            Err(ColormapError::ShapeMismatch { .. })));
    }

    #[test]
    fn reversed_palette_flips_colors() {
        let registry = PaletteRegistry::builtin();
        let c = TileColorizer::new(&registry);
        let data = [0u8, 255];
        let tile = Tile::new(&data, 2, 1).unwrap();
        let img = c.colorize(&tile, &range(0., 255.), Some("greyscale_r"), 7)
            .unwrap();
        assert_eq!(img.pixels(), &[RGBA8::new(255, 255, 255, 255),
                                   RGBA8::new(1, 1, 1, 255)]);
    }
}
