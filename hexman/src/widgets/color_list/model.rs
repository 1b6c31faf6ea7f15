use hexman_color::{HexColor, Rgb, default_palette};

/// Delay after which shake and invalid feedback clear.
pub(crate) const FEEDBACK_DELAY_MS: u64 = 300;
/// Tick interval while feedback is pending.
pub(crate) const FEEDBACK_TICK_MS: u64 = 16;
/// Longest text the hex field accepts (`#RRGGBB`).
pub(crate) const MAX_INPUT_LEN: usize = 7;

pub(crate) const INPUT_PLACEHOLDER: &str = "#FF5733";
pub(crate) const INVALID_FORMAT_MESSAGE: &str =
    "Invalid hex color format. Use #RGB or #RRGGBB format.";

/// Visual arrangement of the entries. Logic is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Cards laid out in rows of `grid_columns`.
    Grid,
    /// One row per entry.
    Table,
}

impl Layout {
    /// Parse a layout name, case-insensitive.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Table => "table",
        }
    }

    /// Return the other layout.
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::Table,
            Self::Table => Self::Grid,
        }
    }
}

/// Authoritative ordered list of canonical colors. Never resized.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColorList {
    colors: Vec<HexColor>,
}

impl Default for ColorList {
    fn default() -> Self {
        Self {
            colors: default_palette(),
        }
    }
}

impl ColorList {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&HexColor> {
        self.colors.get(index)
    }

    pub(crate) fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Replace one color by index, keeping every other slot and the order.
    ///
    /// The value is trusted: entries validate before committing.
    pub(crate) fn update(&mut self, index: usize, color: HexColor) -> bool {
        let Some(slot) = self.colors.get_mut(index) else {
            return false;
        };
        *slot = color;
        true
    }

    /// Restore the default palette in place.
    pub(crate) fn reset(&mut self) {
        for (slot, color) in self.colors.iter_mut().zip(default_palette()) {
            *slot = color;
        }
    }
}

/// Conceptual editing phase of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryPhase {
    Idle,
    EditingValid,
    EditingInvalidPending,
    Shaking,
}

/// Read-only snapshot of one entry for rendering.
#[derive(Debug, Clone)]
pub(crate) struct EntryViewModel<'a> {
    pub(crate) index: usize,
    pub(crate) color: &'a HexColor,
    pub(crate) raw: &'a str,
    pub(crate) is_invalid: bool,
    pub(crate) phase: EntryPhase,
    pub(crate) shake_offset: f32,
    pub(crate) is_picker_open: bool,
    pub(crate) picker_rgb: Rgb,
}

/// Read-only view model for the whole list.
#[derive(Debug, Clone)]
pub(crate) struct ColorListViewModel<'a> {
    pub(crate) entries: Vec<EntryViewModel<'a>>,
    pub(crate) layout: Layout,
    pub(crate) grid_columns: usize,
}

/// Visible label of an entry, 1-based.
pub(crate) fn entry_label(index: usize) -> String {
    format!("Color {}", index + 1)
}

/// Description of an entry swatch.
pub(crate) fn preview_label(index: usize, color: &HexColor) -> String {
    format!("Color {} preview showing {color}", index + 1)
}

pub(crate) fn input_label(index: usize) -> String {
    format!("Color {} hex input", index + 1)
}

pub(crate) fn picker_label(index: usize) -> String {
    format!("Color {} picker", index + 1)
}

#[cfg(test)]
mod tests {
    use hexman_color::{DEFAULT_PALETTE, HexColor};

    use super::{ColorList, Layout, entry_label, preview_label};

    #[test]
    fn given_default_list_then_matches_default_palette() {
        let list = ColorList::default();

        let values: Vec<&str> =
            list.colors().iter().map(HexColor::as_str).collect();
        assert_eq!(values, DEFAULT_PALETTE);
    }

    #[test]
    fn given_index_when_updated_then_only_that_slot_changes() {
        let mut list = ColorList::default();
        let before = list.clone();
        let color = HexColor::parse("#123456").expect("value should parse");

        assert!(list.update(4, color.clone()));

        assert_eq!(list.len(), before.len());
        for index in 0..list.len() {
            if index == 4 {
                assert_eq!(list.get(index), Some(&color));
            } else {
                assert_eq!(list.get(index), before.get(index));
            }
        }
    }

    #[test]
    fn given_out_of_range_index_when_updated_then_list_is_untouched() {
        let mut list = ColorList::default();
        let color = HexColor::parse("#000").expect("value should parse");

        assert!(!list.update(10, color));

        assert_eq!(list, ColorList::default());
    }

    #[test]
    fn given_edited_list_when_reset_then_defaults_are_restored() {
        let mut list = ColorList::default();
        let color = HexColor::parse("#abc").expect("value should parse");
        list.update(0, color);

        list.reset();

        assert_eq!(list, ColorList::default());
    }

    #[test]
    fn given_layout_names_when_parsed_then_case_is_ignored() {
        assert_eq!(Layout::parse("Grid"), Some(Layout::Grid));
        assert_eq!(Layout::parse(" TABLE "), Some(Layout::Table));
        assert_eq!(Layout::parse("cards"), None);
        assert_eq!(Layout::Grid.toggled(), Layout::Table);
    }

    #[test]
    fn given_index_when_labelled_then_uses_one_based_position() {
        let color = HexColor::parse("#FF5733").expect("value should parse");

        assert_eq!(entry_label(0), "Color 1");
        assert_eq!(preview_label(9, &color), "Color 10 preview showing #FF5733");
    }
}
