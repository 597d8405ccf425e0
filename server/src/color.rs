use serde::Serialize;
use thiserror::Error;

/// A sampled pixel color. Components are already validated to [0,255]
/// by the time a value of this type exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A reference palette entry
#[derive(Debug, Clone)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Rgb,
}

/// Resolver result. `hex` encodes the sampled pixel exactly, not the
/// matched reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorMatch {
    #[serde(rename = "color_name")]
    pub name: String,
    #[serde(rename = "hex_code")]
    pub hex: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid rgb input: {0}")]
    InvalidInput(String),
    #[error("reference palette is empty")]
    EmptyPalette,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Validate an untrusted component list as it arrives off the wire.
    pub fn from_components(components: &[i64]) -> Result<Self, ResolveError> {
        let [r, g, b] = components else {
            return Err(ResolveError::InvalidInput(format!(
                "expected 3 components, got {}",
                components.len()
            )));
        };

        Ok(Rgb::new(
            channel_value("red", *r)?,
            channel_value("green", *g)?,
            channel_value("blue", *b)?,
        ))
    }

    /// 6-digit uppercase hex encoding, e.g. (255, 0, 0) -> "FF0000"
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in RGB space
    fn distance_squared(&self, other: &Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

fn channel_value(channel: &str, value: i64) -> Result<u8, ResolveError> {
    u8::try_from(value).map_err(|_| {
        ResolveError::InvalidInput(format!("{channel} component {value} out of range 0-255"))
    })
}

/// Find the nearest named color for a sampled pixel.
///
/// Scans the whole table and keeps the entry with the minimum squared
/// Euclidean distance. The strict comparison keeps the first entry in
/// table order on exact ties, so results are stable for a given palette.
pub fn resolve(rgb: Rgb, entries: &[NamedColor]) -> Result<ColorMatch, ResolveError> {
    let mut best: Option<(&NamedColor, u32)> = None;

    for entry in entries {
        let distance = rgb.distance_squared(&entry.rgb);
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((entry, distance)),
        }
    }

    let (entry, _) = best.ok_or(ResolveError::EmptyPalette)?;

    Ok(ColorMatch {
        name: entry.name.clone(),
        hex: rgb.hex(),
    })
}
