use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::color::{self, ColorMatch, NamedColor, ResolveError, Rgb};

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette has no entries")]
    Empty,
    #[error("duplicate palette entry name: {0}")]
    DuplicateName(String),
    #[error("palette entry {name}: {source}")]
    InvalidEntry {
        name: String,
        #[source]
        source: ResolveError,
    },
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk palette record, one per named color, order preserved
#[derive(Debug, Deserialize)]
struct PaletteRecord {
    name: String,
    r: i64,
    g: i64,
    b: i64,
}

/// The reference palette: an ordered, read-only set of named colors,
/// loaded once at startup. Construction rejects empty input and
/// duplicate names, so a `Palette` value is always usable for matching.
pub struct Palette {
    entries: Vec<NamedColor>,
}

impl Palette {
    pub fn new(entries: Vec<NamedColor>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PaletteError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Palette { entries })
    }

    /// The css named colors, ordered by component value. Some reference
    /// values repeat under different names (aqua/cyan, gray/grey); the
    /// first entry in table order wins on exact ties.
    pub fn builtin() -> Self {
        let entries = CSS_COLORS
            .iter()
            .map(|&(name, r, g, b)| NamedColor {
                name: name.to_string(),
                rgb: Rgb::new(r, g, b),
            })
            .collect();

        // The static table is non-empty with unique names
        Palette { entries }
    }

    /// Load a palette override from a JSON file: an ordered array of
    /// `{"name", "r", "g", "b"}` records. Any invalid record is fatal.
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<PaletteRecord> = serde_json::from_str(&raw)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<PaletteRecord>) -> Result<Self, PaletteError> {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let rgb = Rgb::from_components(&[record.r, record.g, record.b]).map_err(|source| {
                PaletteError::InvalidEntry {
                    name: record.name.clone(),
                    source,
                }
            })?;
            entries.push(NamedColor {
                name: record.name,
                rgb,
            });
        }
        Self::new(entries)
    }

    /// Resolve a sampled pixel to its nearest named color
    pub fn resolve(&self, rgb: Rgb) -> Result<ColorMatch, ResolveError> {
        color::resolve(rgb, &self.entries)
    }

    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static CSS_COLORS: [(&str, u8, u8, u8); 147] = [
    ("aqua", 0, 255, 255),
    ("aliceblue", 240, 248, 255),
    ("antiquewhite", 250, 235, 215),
    ("black", 0, 0, 0),
    ("blue", 0, 0, 255),
    ("cyan", 0, 255, 255),
    ("darkblue", 0, 0, 139),
    ("darkcyan", 0, 139, 139),
    ("darkgreen", 0, 100, 0),
    ("darkturquoise", 0, 206, 209),
    ("deepskyblue", 0, 191, 255),
    ("green", 0, 128, 0),
    ("lime", 0, 255, 0),
    ("mediumblue", 0, 0, 205),
    ("mediumspringgreen", 0, 250, 154),
    ("navy", 0, 0, 128),
    ("springgreen", 0, 255, 127),
    ("teal", 0, 128, 128),
    ("midnightblue", 25, 25, 112),
    ("dodgerblue", 30, 144, 255),
    ("lightseagreen", 32, 178, 170),
    ("forestgreen", 34, 139, 34),
    ("seagreen", 46, 139, 87),
    ("darkslategray", 47, 79, 79),
    ("darkslategrey", 47, 79, 79),
    ("limegreen", 50, 205, 50),
    ("mediumseagreen", 60, 179, 113),
    ("turquoise", 64, 224, 208),
    ("royalblue", 65, 105, 225),
    ("steelblue", 70, 130, 180),
    ("darkslateblue", 72, 61, 139),
    ("mediumturquoise", 72, 209, 204),
    ("indigo", 75, 0, 130),
    ("darkolivegreen", 85, 107, 47),
    ("cadetblue", 95, 158, 160),
    ("cornflowerblue", 100, 149, 237),
    ("mediumaquamarine", 102, 205, 170),
    ("dimgray", 105, 105, 105),
    ("dimgrey", 105, 105, 105),
    ("slateblue", 106, 90, 205),
    ("olivedrab", 107, 142, 35),
    ("slategray", 112, 128, 144),
    ("slategrey", 112, 128, 144),
    ("lightslategray", 119, 136, 153),
    ("lightslategrey", 119, 136, 153),
    ("mediumslateblue", 123, 104, 238),
    ("lawngreen", 124, 252, 0),
    ("aquamarine", 127, 255, 212),
    ("chartreuse", 127, 255, 0),
    ("gray", 128, 128, 128),
    ("grey", 128, 128, 128),
    ("maroon", 128, 0, 0),
    ("olive", 128, 128, 0),
    ("purple", 128, 0, 128),
    ("lightskyblue", 135, 206, 250),
    ("skyblue", 135, 206, 235),
    ("blueviolet", 138, 43, 226),
    ("darkmagenta", 139, 0, 139),
    ("darkred", 139, 0, 0),
    ("saddlebrown", 139, 69, 19),
    ("darkseagreen", 143, 188, 143),
    ("lightgreen", 144, 238, 144),
    ("mediumpurple", 147, 112, 219),
    ("darkviolet", 148, 0, 211),
    ("palegreen", 152, 251, 152),
    ("darkorchid", 153, 50, 204),
    ("yellowgreen", 154, 205, 50),
    ("sienna", 160, 82, 45),
    ("brown", 165, 42, 42),
    ("darkgray", 169, 169, 169),
    ("darkgrey", 169, 169, 169),
    ("greenyellow", 173, 255, 47),
    ("lightblue", 173, 216, 230),
    ("paleturquoise", 175, 238, 238),
    ("lightsteelblue", 176, 196, 222),
    ("powderblue", 176, 224, 230),
    ("firebrick", 178, 34, 34),
    ("darkgoldenrod", 184, 134, 11),
    ("mediumorchid", 186, 85, 211),
    ("rosybrown", 188, 143, 143),
    ("darkkhaki", 189, 183, 107),
    ("silver", 192, 192, 192),
    ("mediumvioletred", 199, 21, 133),
    ("indianred", 205, 92, 92),
    ("peru", 205, 133, 63),
    ("chocolate", 210, 105, 30),
    ("tan", 210, 180, 140),
    ("lightgray", 211, 211, 211),
    ("lightgrey", 211, 211, 211),
    ("thistle", 216, 191, 216),
    ("goldenrod", 218, 165, 32),
    ("orchid", 218, 112, 214),
    ("palevioletred", 219, 112, 147),
    ("crimson", 220, 20, 60),
    ("gainsboro", 220, 220, 220),
    ("plum", 221, 160, 221),
    ("burlywood", 222, 184, 135),
    ("lightcyan", 224, 255, 255),
    ("lavender", 230, 230, 250),
    ("darksalmon", 233, 150, 122),
    ("palegoldenrod", 238, 232, 170),
    ("violet", 238, 130, 238),
    ("azure", 240, 255, 255),
    ("honeydew", 240, 255, 240),
    ("khaki", 240, 230, 140),
    ("lightcoral", 240, 128, 128),
    ("sandybrown", 244, 164, 96),
    ("beige", 245, 245, 220),
    ("mintcream", 245, 255, 250),
    ("wheat", 245, 222, 179),
    ("whitesmoke", 245, 245, 245),
    ("ghostwhite", 248, 248, 255),
    ("lightgoldenrodyellow", 250, 250, 210),
    ("linen", 250, 240, 230),
    ("salmon", 250, 128, 114),
    ("oldlace", 253, 245, 230),
    ("bisque", 255, 228, 196),
    ("blanchedalmond", 255, 235, 205),
    ("coral", 255, 127, 80),
    ("cornsilk", 255, 248, 220),
    ("darkorange", 255, 140, 0),
    ("deeppink", 255, 20, 147),
    ("floralwhite", 255, 250, 240),
    ("fuchsia", 255, 0, 255),
    ("gold", 255, 215, 0),
    ("hotpink", 255, 105, 180),
    ("ivory", 255, 255, 240),
    ("lavenderblush", 255, 240, 245),
    ("lemonchiffon", 255, 250, 205),
    ("lightpink", 255, 182, 193),
    ("lightsalmon", 255, 160, 122),
    ("lightyellow", 255, 255, 224),
    ("magenta", 255, 0, 255),
    ("mistyrose", 255, 228, 225),
    ("moccasin", 255, 228, 181),
    ("navajowhite", 255, 222, 173),
    ("orange", 255, 165, 0),
    ("orangered", 255, 69, 0),
    ("papayawhip", 255, 239, 213),
    ("peachpuff", 255, 218, 185),
    ("pink", 255, 192, 203),
    ("red", 255, 0, 0),
    ("seashell", 255, 245, 238),
    ("snow", 255, 250, 250),
    ("tomato", 255, 99, 71),
    ("white", 255, 255, 255),
    ("yellow", 255, 255, 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palette_has_unique_names() {
        let palette = Palette::builtin();
        assert!(!palette.is_empty());

        let mut seen = HashSet::new();
        for entry in palette.entries() {
            assert!(
                seen.insert(entry.name.as_str()),
                "duplicate name {}",
                entry.name
            );
        }
    }

    #[test]
    fn builtin_exact_hits_return_the_css_name() {
        let palette = Palette::builtin();
        assert_eq!(palette.resolve(Rgb::new(255, 0, 0)).unwrap().name, "red");
        assert_eq!(palette.resolve(Rgb::new(0, 128, 128)).unwrap().name, "teal");
    }

    #[test]
    fn builtin_resolves_boundary_pixels() {
        let palette = Palette::builtin();

        let black = palette.resolve(Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(black.name, "black");
        assert_eq!(black.hex, "000000");

        let white = palette.resolve(Rgb::new(255, 255, 255)).unwrap();
        assert_eq!(white.name, "white");
        assert_eq!(white.hex, "FFFFFF");
    }

    #[test]
    fn builtin_nearest_match_for_off_palette_pixel() {
        let palette = Palette::builtin();
        // Slightly dirty red is still closest to pure red
        let result = palette.resolve(Rgb::new(250, 10, 10)).unwrap();
        assert_eq!(result.name, "red");
        assert_eq!(result.hex, "FA0A0A");
    }

    #[test]
    fn new_rejects_empty_palette() {
        assert!(matches!(Palette::new(Vec::new()), Err(PaletteError::Empty)));
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let entries = vec![
            NamedColor {
                name: "red".to_string(),
                rgb: Rgb::new(255, 0, 0),
            },
            NamedColor {
                name: "red".to_string(),
                rgb: Rgb::new(200, 0, 0),
            },
        ];
        assert!(matches!(
            Palette::new(entries),
            Err(PaletteError::DuplicateName(name)) if name == "red"
        ));
    }

    #[test]
    fn from_records_preserves_order_and_values() {
        let records: Vec<PaletteRecord> = serde_json::from_str(
            r#"[
                {"name": "Red", "r": 255, "g": 0, "b": 0},
                {"name": "Black", "r": 0, "g": 0, "b": 0}
            ]"#,
        )
        .unwrap();
        let palette = Palette::from_records(records).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entries()[0].name, "Red");
        assert_eq!(palette.resolve(Rgb::new(250, 10, 10)).unwrap().name, "Red");
    }

    #[test]
    fn from_records_rejects_out_of_range_components() {
        let records: Vec<PaletteRecord> =
            serde_json::from_str(r#"[{"name": "Bad", "r": 300, "g": 0, "b": 0}]"#).unwrap();
        assert!(matches!(
            Palette::from_records(records),
            Err(PaletteError::InvalidEntry { name, .. }) if name == "Bad"
        ));
    }

    #[test]
    fn from_file_round_trip() {
        let path = std::env::temp_dir().join("photocolor-palette-test.json");
        std::fs::write(
            &path,
            r#"[{"name": "Red", "r": 255, "g": 0, "b": 0}, {"name": "Black", "r": 0, "g": 0, "b": 0}]"#,
        )
        .unwrap();

        let palette = Palette::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.resolve(Rgb::new(5, 5, 5)).unwrap().name, "Black");
    }

    #[test]
    fn from_file_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("photocolor-palette-does-not-exist.json");
        assert!(matches!(
            Palette::from_file(&path),
            Err(PaletteError::Io(_))
        ));
    }
}
