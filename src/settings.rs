//! Engine configuration, deserializable from the host's config file.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::error::{ColormapError, Result};
use crate::palette::{Palette, PaletteType};

/// Number of entries of a colormap table when the request names none.
pub const DEFAULT_NUM_VALUES: usize = 255;

/// Tiles with at least this many pixels are colorized in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Settings of the colormap engine.
///
/// Missing fields take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Palette used when a request names none.  `None` means greyscale.
    pub default_palette: Option<String>,
    /// Default number of entries of a colormap table.
    pub num_values: usize,
    /// Minimum tile size (in pixels) for row-parallel colorizing.
    pub parallel_threshold: usize,
    /// Extra palettes registered next to the built-in ones.
    pub palettes: Vec<CustomPalette>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_palette: None,
            num_values: DEFAULT_NUM_VALUES,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            palettes: Vec::new(),
        }
    }
}

impl Settings {
    /// Check the values that do not depend on the palette registry.
    pub fn validate(&self) -> Result<()> {
        if self.num_values == 0 {
            return Err(ColormapError::InvalidRange(
                "num_values must be at least 1".into()));
        }
        Ok(())
    }
}

/// A palette defined by equally spaced anchor colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomPalette {
    pub name: String,
    #[serde(default)]
    pub kind: PaletteType,
    pub colors: Vec<[u8; 3]>,
}

impl CustomPalette {
    /// Expand the anchors into a full palette.
    pub fn to_palette(&self) -> Result<Palette> {
        let anchors: Vec<RGB8> = self.colors.iter()
            .map(|&[r, g, b]| RGB8::new(r, g, b)).collect();
        Palette::from_anchors(&self.name, self.kind, &anchors)
    }
}
