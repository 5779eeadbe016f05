// Built-in palettes.  Matplotlib ramps are given by ten equally spaced
// samples, Brewer ramps by their largest class count, see
// https://colorbrewer2.org/

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
use crate::Palette;

// Matplotlib palettes

const VIRIDIS: [[u8; 3]; 10] = [
    [68, 1, 84], [72, 40, 120], [62, 73, 137], [49, 104, 142],
    [38, 130, 142], [31, 158, 137], [53, 183, 121], [110, 206, 88],
    [181, 222, 43], [253, 231, 37]];

const MAGMA: [[u8; 3]; 10] = [
    [0, 0, 4], [24, 15, 61], [68, 15, 118], [114, 31, 129],
    [158, 47, 127], [205, 64, 113], [241, 96, 93], [253, 150, 104],
    [254, 202, 141], [252, 253, 191]];

const INFERNO: [[u8; 3]; 10] = [
    [0, 0, 4], [27, 12, 65], [74, 12, 107], [120, 28, 109],
    [165, 44, 96], [207, 68, 70], [237, 105, 37], [251, 155, 6],
    [247, 209, 61], [252, 255, 164]];

const PLASMA: [[u8; 3]; 10] = [
    [13, 8, 135], [70, 3, 159], [114, 1, 168], [156, 23, 158],
    [189, 55, 134], [216, 87, 107], [237, 121, 83], [251, 159, 58],
    [253, 202, 38], [240, 249, 33]];

const JET_RED: [(f64, f64); 5] = [
    (0., 0.), (0.35, 0.), (0.66, 1.), (0.89, 1.), (1., 0.5)];
const JET_GREEN: [(f64, f64); 6] = [
    (0., 0.), (0.125, 0.), (0.375, 1.), (0.64, 1.), (0.91, 0.), (1., 0.)];
const JET_BLUE: [(f64, f64); 5] = [
    (0., 0.5), (0.11, 1.), (0.34, 1.), (0.65, 0.), (1., 0.)];

// Brewer sequential

const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255], [222, 235, 247], [198, 219, 239], [158, 202, 225],
    [107, 174, 214], [66, 146, 198], [33, 113, 181], [8, 81, 156],
    [8, 48, 107]];

const GREENS: [[u8; 3]; 9] = [
    [247, 252, 245], [229, 245, 224], [199, 233, 192], [161, 217, 155],
    [116, 196, 118], [65, 171, 93], [35, 139, 69], [0, 109, 44],
    [0, 68, 27]];

const REDS: [[u8; 3]; 9] = [
    [255, 245, 240], [254, 224, 210], [252, 187, 161], [252, 146, 114],
    [251, 106, 74], [239, 59, 44], [203, 24, 29], [165, 15, 21],
    [103, 0, 13]];

const GREYS: [[u8; 3]; 9] = [
    [255, 255, 255], [240, 240, 240], [217, 217, 217], [189, 189, 189],
    [150, 150, 150], [115, 115, 115], [82, 82, 82], [37, 37, 37],
    [0, 0, 0]];

const YLGN: [[u8; 3]; 9] = [
    [255, 255, 229], [247, 252, 185], [217, 240, 163], [173, 221, 142],
    [120, 198, 121], [65, 171, 93], [35, 132, 67], [0, 104, 55],
    [0, 69, 41]];

// Brewer diverging

const RDBU: [[u8; 3]; 11] = [
    [103, 0, 31], [178, 24, 43], [214, 96, 77], [244, 165, 130],
    [253, 219, 199], [247, 247, 247], [209, 229, 240], [146, 197, 222],
    [67, 147, 195], [33, 102, 172], [5, 48, 97]];

const SPECTRAL: [[u8; 3]; 11] = [
    [158, 1, 66], [213, 62, 79], [244, 109, 67], [253, 174, 97],
    [254, 224, 139], [255, 255, 191], [230, 245, 152], [171, 221, 164],
    [102, 194, 165], [50, 136, 189], [94, 79, 162]];

const RDYLGN: [[u8; 3]; 11] = [
    [165, 0, 38], [215, 48, 39], [244, 109, 67], [253, 174, 97],
    [254, 224, 139], [255, 255, 191], [217, 239, 139], [166, 217, 106],
    [102, 189, 99], [26, 152, 80], [0, 104, 55]];

/// Name of the palette used when a request does not name one.
pub(crate) const GREYSCALE: &str = "greyscale";

const DATA: [PaletteData; 14] = [
    PaletteData { name: GREYSCALE, typ: PaletteType::Seq, ramp: Ramp::Identity },
    PaletteData { name: "jet", typ: PaletteType::Misc,
                  ramp: Ramp::Segments([&JET_RED, &JET_GREEN, &JET_BLUE]) },
    PaletteData { name: "viridis", typ: PaletteType::Seq, ramp: Ramp::Anchors(&VIRIDIS) },
    PaletteData { name: "magma", typ: PaletteType::Seq, ramp: Ramp::Anchors(&MAGMA) },
    PaletteData { name: "inferno", typ: PaletteType::Seq, ramp: Ramp::Anchors(&INFERNO) },
    PaletteData { name: "plasma", typ: PaletteType::Seq, ramp: Ramp::Anchors(&PLASMA) },
    PaletteData { name: "blues", typ: PaletteType::Seq, ramp: Ramp::Anchors(&BLUES) },
    PaletteData { name: "greens", typ: PaletteType::Seq, ramp: Ramp::Anchors(&GREENS) },
    PaletteData { name: "reds", typ: PaletteType::Seq, ramp: Ramp::Anchors(&REDS) },
    PaletteData { name: "greys", typ: PaletteType::Seq, ramp: Ramp::Anchors(&GREYS) },
    PaletteData { name: "ylgn", typ: PaletteType::Seq, ramp: Ramp::Anchors(&YLGN) },
    PaletteData { name: "rdbu", typ: PaletteType::Div, ramp: Ramp::Anchors(&RDBU) },
    PaletteData { name: "spectral", typ: PaletteType::Div, ramp: Ramp::Anchors(&SPECTRAL) },
    PaletteData { name: "rdylgn", typ: PaletteType::Div, ramp: Ramp::Anchors(&RDYLGN) },
];

lazy_static! {
    /// All built-in palettes, expanded once.
    pub(crate) static ref BUILTIN: Vec<Palette> =
        DATA.iter().map(Palette::from_data).collect();
}
