use std::time::Instant;

use hexman_color::HexColor;

/// UI events emitted by the color list presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ColorListEvent {
    /// The hex text field of an entry changed.
    InputChanged { index: usize, value: String },
    /// Enter was pressed in the hex text field of an entry.
    InputSubmitted { index: usize },
    /// Focus left the edited text field (background click, Tab, Escape).
    BlurRequested,
    /// The picker panel of an entry was opened or closed.
    PickerToggled { index: usize },
    /// The picker of an entry produced a new value.
    PickerChanged { index: usize, value: HexColor },
    /// Restore the default palette.
    ResetPalette,
    /// Switch between grid and table layouts.
    LayoutToggled,
    /// Feedback timer tick.
    Tick(Instant),
}

/// Effect events produced by the color list reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum ColorListEffect {
    /// An entry committed a new canonical color.
    Committed { index: usize, color: HexColor },
    /// An entry discarded malformed text on blur.
    Rejected { index: usize, input: String },
    /// The palette was restored to its defaults.
    PaletteReset,
}
