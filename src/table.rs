//! Explicit value → color tables, for legends and client-side lookup.

use rgb::RGB8;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;
use crate::error::{ColormapError, Result};
use crate::registry::PaletteRegistry;
use crate::settings::{Settings, DEFAULT_NUM_VALUES};
use crate::stretch::StretchRange;

/// One row of a colormap table.
///
/// Serializes as `{"value": v, "rgb": [r, g, b]}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColormapEntry {
    pub value: f64,
    pub rgb: RGB8,
}

impl Serialize for ColormapEntry {
    fn serialize<S: Serializer>(&self, serializer: S)
                                -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ColormapEntry", 2)?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("rgb", &[self.rgb.r, self.rgb.g, self.rgb.b])?;
        s.end()
    }
}

/// Builds colormap tables from the palettes of a registry.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'r> {
    registry: &'r PaletteRegistry,
    num_values: usize,
}

impl<'r> TableBuilder<'r> {
    pub fn new(registry: &'r PaletteRegistry) -> Self {
        TableBuilder { registry, num_values: DEFAULT_NUM_VALUES }
    }

    /// Take the default table size from `settings`.
    pub fn with_settings(registry: &'r PaletteRegistry, settings: &Settings)
                         -> Self {
        TableBuilder { registry, num_values: settings.num_values }
    }

    /// Sample `num_values` (or the default number of) values evenly
    /// from `range.low()` to `range.high()`, both included, and pair
    /// each with its color under `palette` (the default palette for
    /// `None`).
    ///
    /// Fails with [`ColormapError::UnknownPalette`] if `palette` is not
    /// registered and with [`ColormapError::InvalidRange`] if
    /// `num_values` is zero.  A degenerate range (`low == high`) is
    /// also rejected with [`ColormapError::InvalidRange`] unless a
    /// single value is asked for: the values of a table are strictly
    /// increasing, so `n` copies of `low` are not a valid table.
    pub fn build(&self, palette: Option<&str>, range: &StretchRange,
                 num_values: Option<usize>) -> Result<Vec<ColormapEntry>> {
        let n = num_values.unwrap_or(self.num_values);
        if n == 0 {
            return Err(ColormapError::InvalidRange(
                "num_values must be at least 1".into()));
        }
        if range.is_degenerate() && n > 1 {
            return Err(ColormapError::InvalidRange(format!(
                "cannot take {n} distinct values from [{}, {}]",
                range.low(), range.high())));
        }
        let palette = self.registry.resolve(palette)?;
        debug!(palette = palette.name(), low = range.low(), high = range.high(),
               num_values = n, "building colormap table");
        Ok(range.samples(n)
           .map(|(value, _)| ColormapEntry { value,
                                             rgb: palette.color_of(value, range) })
           .collect())
    }
}
