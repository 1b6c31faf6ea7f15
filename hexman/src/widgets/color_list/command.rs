use std::time::Instant;

use hexman_color::HexColor;

use super::model::Layout;

/// Internal commands dispatched to the color list reducer.
#[derive(Debug, Clone)]
pub(crate) enum ColorListCommand {
    /// Apply a keystroke to an entry.
    InputChanged { index: usize, value: String },
    /// Blur an entry explicitly.
    InputSubmitted { index: usize },
    /// Blur the entry that is being edited, if any.
    Blur,
    /// Open or close the picker panel of an entry.
    PickerToggled { index: usize },
    /// Apply a picker selection to an entry.
    PickerChanged { index: usize, value: HexColor },
    /// Restore the default palette.
    ResetPalette,
    /// Use the given layout.
    SetLayout(Layout),
    /// Expire feedback deadlines due at the given instant.
    Tick(Instant),
}
