//! Value-to-color mapping for raster tiles.
//!
//! A raster tile (a grid of numeric samples with a no-data sentinel) is
//! turned into an RGBA image by stretching its values over a
//! [`StretchRange`] and looking them up in a 256-color [`Palette`].
//! The same lookup also produces explicit colormap tables, e.g. for
//! legends, and the two always agree.
//!
//! - [`PaletteRegistry`]: named palettes, built once and shared;
//! - [`normalize`]: the value → palette index mapping;
//! - [`TableBuilder`]: ordered `(value, rgb)` tables;
//! - [`TileColorizer`]: tiles → [`RgbaImage`]s.
//!
//! Built-in palettes are `greyscale` (the default), `jet`, the
//! Matplotlib `viridis`, `magma`, `inferno`, `plasma` and the [Brewer
//! schemes](https://colorbrewer2.org/) `blues`, `greens`, `reds`,
//! `greys`, `ylgn`, `rdbu`, `spectral` and `rdylgn`.  Appending `_r`
//! to a name gives the reversed palette.
//!
//! # Example
//!
//! ```
//! use tile_colormap::{PaletteRegistry, StretchRange, TableBuilder,
//!                     Tile, TileColorizer};
//!
//! let registry = PaletteRegistry::builtin();
//! let range = StretchRange::new(0., 100.)?;
//!
//! let data = [0i16, 50, -1, 100];
//! let tile = Tile::new(&data, 2, 2)?;
//! let img = TileColorizer::new(&registry)
//!     .colorize(&tile, &range, Some("viridis"), -1)?;
//! assert_eq!(img.get(0, 1).map(|p| p.a), Some(0));
//!
//! let legend = TableBuilder::new(&registry)
//!     .build(Some("viridis"), &range, Some(101))?;
//! let px = img.get(1, 0).unwrap();
//! assert_eq!(legend[50].value, 50.);
//! assert_eq!(legend[50].rgb, rgb::RGB8::new(px.r, px.g, px.b));
//! # Ok::<(), tile_colormap::ColormapError>(())
//! ```

mod colorize;
mod error;
pub mod gradient;
mod palette;
mod palettes;
mod registry;
mod settings;
mod stretch;
mod table;
mod tile;

pub use colorize::{TileColorizer, TRANSPARENT};
pub use error::{ColormapError, Result};
pub use palette::{Palette, PaletteType, PALETTE_SIZE};
pub use registry::PaletteRegistry;
pub use settings::{CustomPalette, Settings, DEFAULT_NUM_VALUES,
                   DEFAULT_PARALLEL_THRESHOLD};
pub use stretch::{normalize, Samples, StretchRange, MAX_INDEX, MIN_INDEX,
                  NODATA_INDEX};
pub use table::{ColormapEntry, TableBuilder};
pub use tile::{RgbaImage, Sample, Tile};
