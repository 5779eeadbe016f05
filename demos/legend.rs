use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tile_colormap::{ColormapEntry, PaletteRegistry, StretchRange,
                    TableBuilder, Tile, TileColorizer};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn legend(fh: &mut impl Write, cmap: &[ColormapEntry],
          width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for e in cmap {
        writeln!(fh, "  <td title=\"{}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 e.value, css_string(e.rgb))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let registry = PaletteRegistry::builtin();
    let tables = TableBuilder::new(&registry);
    let range = StretchRange::new(0., 1000.)?;

    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>tile-colormap: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    let names: Vec<&str> = registry.names()
        .filter(|n| !n.ends_with("_r")).collect();
    for &name in &names {
        let cmap = tables.build(Some(name), &range, Some(128))?;
        legend(&mut fh, &cmap, 2, name)?;
    }

    writeln!(fh, "<h3>Stretch</h3>")?;
    for (low, high) in [(0., 1000.), (250., 750.), (400., 450.)] {
        let stretch = StretchRange::new(low, high)?;
        let samples: Vec<f64> = range.samples(128).map(|(x, _)| x).collect();
        let tile = Tile::new(&samples, samples.len(), 1)?;
        let img = TileColorizer::new(&registry)
            .colorize(&tile, &stretch, Some("viridis"), f64::NAN)?;
        let cmap: Vec<ColormapEntry> = samples.iter().zip(img.pixels())
            .map(|(&value, p)| ColormapEntry { value,
                                               rgb: RGB8::new(p.r, p.g, p.b) })
            .collect();
        legend(&mut fh, &cmap, 2,
               &format!("viridis, [{low}, {high}] over [0, 1000]"))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
