//! Name → palette lookup.

use std::collections::BTreeMap;
use tracing::debug;
use crate::error::{ColormapError, Result};
use crate::palette::Palette;
use crate::palettes::BUILTIN;
use crate::settings::Settings;

/// An immutable set of named palettes plus the palette used when a
/// request does not name one.
///
/// Built once (typically at start-up) and then shared by reference with
/// [`TableBuilder`](crate::TableBuilder) and
/// [`TileColorizer`](crate::TileColorizer).  Names are matched ASCII
/// case-insensitively, and every palette `p` is also available
/// reversed as `p_r`.
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, Palette>,
    default: Palette,
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::builtin() }
}

impl PaletteRegistry {
    /// A registry with no named palette; the default is greyscale.
    pub fn empty() -> Self {
        PaletteRegistry { palettes: BTreeMap::new(),
                          default: Palette::greyscale() }
    }

    /// A registry holding the built-in palettes; the default is greyscale.
    pub fn builtin() -> Self {
        let registry = BUILTIN.iter().cloned()
            .fold(Self::empty(), |r, p| r.with_palette(p));
        debug!(palettes = registry.len(), "built-in palette registry ready");
        registry
    }

    /// Built-in palettes, the custom palettes of `settings` and its
    /// default palette.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let mut registry = Self::builtin();
        for custom in &settings.palettes {
            registry = registry.with_palette(custom.to_palette()?);
        }
        if let Some(name) = &settings.default_palette {
            registry = registry.with_default(name)?;
        }
        debug!(palettes = registry.len(), default_palette = registry.default.name(),
               "palette registry configured");
        Ok(registry)
    }

    /// Add `palette` and its reversed version, replacing palettes of
    /// the same names.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        let reversed = palette.reversed();
        self.palettes.insert(palette.name().to_ascii_lowercase(), palette);
        self.palettes.insert(reversed.name().to_ascii_lowercase(), reversed);
        self
    }

    /// Use the registered palette `name` when a request names none.
    pub fn with_default(mut self, name: &str) -> Result<Self> {
        let palette = self.get(name)?.clone();
        self.default = palette;
        Ok(self)
    }

    fn get(&self, name: &str) -> Result<&Palette> {
        self.palettes.get(&name.to_ascii_lowercase())
            .ok_or_else(|| ColormapError::UnknownPalette { name: name.to_string() })
    }

    /// The palette called `name`, or the default palette for `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Palette> {
        match name {
            None => Ok(&self.default),
            Some(name) => self.get(name),
        }
    }

    /// The palette used when a request names none.
    pub fn default_palette(&self) -> &Palette { &self.default }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered names (including the `_r` variants), sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    /// Number of registered palettes (including the `_r` variants).
    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::palette::PaletteType;
    use crate::settings::CustomPalette;

    #[test]
    fn none_is_greyscale() {
        let r = PaletteRegistry::builtin();
        let p = r.resolve(None).unwrap();
        assert_eq!(p.name(), "greyscale");
        assert_eq!(p.get(1), RGB8::new(1, 1, 1));
    }

    #[test]
    fn unknown_palette() {
        let r = PaletteRegistry::builtin();
        assert_eq!(r.resolve(Some("nope")).unwrap_err(),
                   ColormapError::UnknownPalette { name: "nope".into() });
        assert!(PaletteRegistry::empty().resolve(Some("jet")).is_err());
    }

    #[test]
    fn builtin_names() {
        let r = PaletteRegistry::builtin();
        for name in ["greyscale", "jet", "viridis", "magma", "inferno",
                     "plasma", "blues", "greens", "reds", "greys", "ylgn",
                     "rdbu", "spectral", "rdylgn"] {
            assert!(r.contains(name), "{name} missing");
            assert!(r.contains(&format!("{name}_r")), "{name}_r missing");
        }
        assert_eq!(r.len(), 28);
        let names: Vec<_> = r.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn lookup_ignores_case() {
        let r = PaletteRegistry::builtin();
        assert_eq!(r.resolve(Some("Viridis")).unwrap().name(), "viridis");
        assert_eq!(r.resolve(Some("JET_R")).unwrap().name(), "jet_r");
    }

    #[test]
    fn jet_end_points() {
        let r = PaletteRegistry::builtin();
        let jet = r.resolve(Some("jet")).unwrap();
        assert_eq!(jet.typ(), PaletteType::Misc);
        assert_eq!(jet.get(0), RGB8::new(0, 0, 128));
        assert_eq!(jet.get(255), RGB8::new(128, 0, 0));
        let jet_r = r.resolve(Some("jet_r")).unwrap();
        assert_eq!(jet_r.get(1), jet.get(255));
    }

    #[test]
    fn settings_default_and_custom() {
        let settings = Settings {
            default_palette: Some("sand".into()),
            palettes: vec![CustomPalette {
                name: "sand".into(),
                kind: PaletteType::Seq,
                colors: vec![[250, 240, 200], [120, 80, 20]],
            }],
            ..Settings::default()
        };
        let r = PaletteRegistry::from_settings(&settings).unwrap();
        assert_eq!(r.resolve(None).unwrap().name(), "sand");
        assert!(r.contains("sand_r"));
        assert!(r.contains("viridis"));

        let bad = Settings { default_palette: Some("nope".into()),
                             ..Settings::default() };
        assert!(matches!(PaletteRegistry::from_settings(&bad),
                         Err(ColormapError::UnknownPalette { .. })));
    }
}
