use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::HexColorError;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses the canonical `#rrggbb` form only. Shorthand must be expanded first.
impl FromStr for Rgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HexColorError::Malformed {
            input: s.to_string(),
        };

        let chars = match s.strip_prefix('#') {
            Some(chars)
                if chars.len() == 6
                    && chars.bytes().all(|byte| byte.is_ascii_hexdigit()) =>
            {
                chars
            },
            _ => return Err(malformed()),
        };

        let channel = |start: usize| {
            u8::from_str_radix(&chars[start..start + 2], 16)
                .map_err(|_| malformed())
        };
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;

        Ok(Self { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn given_canonical_value_when_parsed_then_channels_match() {
        let rgb: Rgb = "#FF5733".parse().expect("value should parse");

        assert_eq!(rgb, Rgb::new(0xFF, 0x57, 0x33));
    }

    #[test]
    fn given_rgb_when_displayed_then_lowercase_hex() {
        assert_eq!(Rgb::new(0, 255, 0).to_string(), "#00ff00");
        assert_eq!(Rgb::new(0xAB, 0x0C, 0x01).to_string(), "#ab0c01");
    }

    #[test]
    fn given_non_canonical_value_when_parsed_then_error() {
        for input in ["#abc", "FF5733", "#FF573", "#GG5733", "#+f5733", "#ä5733"]
        {
            assert!(input.parse::<Rgb>().is_err(), "accepted {input:?}");
        }
    }
}
