use thiserror::Error;

/// Errors produced while turning user text into a canonical color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The input is not `#RGB` or `#RRGGBB` after normalization.
    #[error("invalid hex color format `{input}`, use #RGB or #RRGGBB")]
    Malformed { input: String },
}
