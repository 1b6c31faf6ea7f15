mod color;
mod error;
mod hex;
mod rgb;

pub use color::{DEFAULT_PALETTE, HexColor, default_palette};
pub use error::HexColorError;
pub use hex::{expand_short_hex, is_valid_hex, normalize_hex};
pub use rgb::Rgb;
