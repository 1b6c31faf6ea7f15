use std::fmt::{self, Display, Formatter};

use crate::error::HexColorError;
use crate::hex::{expand_short_hex, is_valid_hex, normalize_hex};
use crate::rgb::Rgb;

/// Palette shown on every fresh start.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33F5", "#F5FF33", "#33FFF5",
    "#FF8C33", "#8C33FF", "#33FF8C", "#FF3333",
];

/// Canonical color value: `#` followed by exactly six hex digits.
///
/// Digit case is kept exactly as produced by the source, so `#ff0000` and
/// `#FF0000` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Turn arbitrary user text into a canonical color.
    ///
    /// Runs `normalize_hex`, validates, then expands shorthand.
    pub fn parse(raw: &str) -> Result<Self, HexColorError> {
        let normalized = normalize_hex(raw);
        if !is_valid_hex(&normalized) {
            return Err(HexColorError::Malformed {
                input: raw.to_string(),
            });
        }

        Ok(Self(expand_short_hex(&normalized)))
    }

    /// Build the lowercase `#rrggbb` value a color picker yields.
    pub fn from_picker(rgb: Rgb) -> Self {
        Self(rgb.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_uppercase(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    pub fn to_rgb(&self) -> Rgb {
        // Always canonical, the fallback is unreachable.
        self.0.parse().unwrap_or_default()
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return the default palette as canonical colors.
pub fn default_palette() -> Vec<HexColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|value| HexColor((*value).to_string()))
        .collect()
}
