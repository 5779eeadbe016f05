//! Fixed-size color palettes.

use std::fmt;
use rgb::RGB8;
use crate::error::{ColormapError, Result};
use crate::gradient::{ColorRange, MultiGradient, Segments};
use crate::palettes::ty::{PaletteData, Ramp};
use crate::stretch::StretchRange;
pub use crate::palettes::ty::PaletteType;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 256;

/// A named, immutable ramp of exactly [`PALETTE_SIZE`] colors.
///
/// Index 0 is the slot reserved for no-data (see
/// [`NODATA_INDEX`](crate::NODATA_INDEX)); valid samples are looked up
/// in `1 ..= 255`.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    typ: PaletteType,
    rgb: [RGB8; PALETTE_SIZE],
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("name", &self.name)
            .field("typ", &self.typ)
            .finish_non_exhaustive()
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ColormapError::InvalidPalette {
            name: name.to_string(), reason: "empty name".into() });
    }
    Ok(())
}

fn collect_ramp(r: &impl ColorRange) -> [RGB8; PALETTE_SIZE] {
    let mut rgb = [RGB8::default(); PALETTE_SIZE];
    for (slot, c) in rgb.iter_mut().zip(r.range(PALETTE_SIZE)) {
        *slot = c;
    }
    rgb
}

impl Palette {
    /// Create a palette from its full list of colors.
    pub fn new(name: &str, typ: PaletteType, rgb: [RGB8; PALETTE_SIZE])
               -> Result<Self> {
        check_name(name)?;
        Ok(Palette { name: name.to_string(), typ, rgb })
    }

    /// Create a palette by interpolating (in CIE L\*C\*h) through
    /// equally spaced anchor colors.  At least two anchors are needed.
    pub fn from_anchors(name: &str, typ: PaletteType, anchors: &[RGB8])
                        -> Result<Self> {
        check_name(name)?;
        let gradient = MultiGradient::new(anchors).ok_or_else(|| {
            ColormapError::InvalidPalette {
                name: name.to_string(),
                reason: format!("needs at least 2 anchor colors, got {}",
                                anchors.len()) }
        })?;
        Ok(Palette { name: name.to_string(), typ,
                     rgb: collect_ramp(&gradient) })
    }

    /// The greyscale ramp, index `i` ↦ `(i, i, i)`.
    pub fn greyscale() -> Self {
        Self::identity(crate::palettes::GREYSCALE)
    }

    fn identity(name: &str) -> Self {
        let mut rgb = [RGB8::default(); PALETTE_SIZE];
        for (i, c) in rgb.iter_mut().enumerate() {
            let v = i as u8;
            *c = RGB8::new(v, v, v);
        }
        Palette { name: name.to_string(), typ: PaletteType::Seq, rgb }
    }

    pub(crate) fn from_data(data: &PaletteData) -> Self {
        let rgb = match &data.ramp {
            Ramp::Identity => return Self::identity(data.name),
            Ramp::Anchors(anchors) => {
                debug_assert!(anchors.len() >= 2,
                              "palette {} needs at least two anchors", data.name);
                let anchors: Vec<RGB8> = anchors.iter()
                    .map(|&[r, g, b]| RGB8::new(r, g, b)).collect();
                match MultiGradient::new(&anchors) {
                    Some(g) => collect_ramp(&g),
                    None => [RGB8::default(); PALETTE_SIZE],
                }
            }
            Ramp::Segments([red, green, blue]) =>
                collect_ramp(&Segments { red: *red, green: *green, blue: *blue }),
        };
        Palette { name: data.name.to_string(), typ: data.typ, rgb }
    }

    /// Returns the name of the palette.
    #[inline]
    pub fn name(&self) -> &str { &self.name }

    /// Says whether the palette is `Seq`uential, `Div`ergent or `Misc`.
    #[inline]
    pub fn typ(&self) -> PaletteType { self.typ }

    /// Returns all the colors of the palette.
    #[inline]
    pub fn colors(&self) -> &[RGB8; PALETTE_SIZE] { &self.rgb }

    /// Returns the color at `index`.
    #[inline]
    pub fn get(&self, index: u8) -> RGB8 { self.rgb[index as usize] }

    /// Color of `value` under the stretch `range`.
    ///
    /// This is the lookup shared by tile rendering and colormap tables.
    #[inline]
    pub fn color_of(&self, value: f64, range: &StretchRange) -> RGB8 {
        self.get(range.index(value))
    }

    /// The palette with the valid-data span `1 ..= 255` mirrored and
    /// the name suffixed with `_r`.  Index 0 is kept.
    pub fn reversed(&self) -> Self {
        let mut rgb = self.rgb;
        rgb[1..].reverse();
        Palette { name: format!("{}_r", self.name), typ: self.typ, rgb }
    }
}
