use serde::{Deserialize, Serialize};

/// Type of Palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    #[default]
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    Div,
    /// Ramps with no perceptual ordering guarantee, such as `jet`.
    Misc,
}

/// How a built-in palette is expanded to its full size.
pub(crate) enum Ramp {
    /// The identity ramp `i ↦ (i, i, i)`.
    Identity,
    /// Equally spaced anchors, interpolated in L\*C\*h.
    Anchors(&'static [[u8; 3]]),
    /// Per-channel `(x, y)` control points, interpolated linearly.
    Segments([&'static [(f64, f64)]; 3]),
}

/// Definition of a built-in palette.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) typ: PaletteType,
    pub(crate) ramp: Ramp,
}
