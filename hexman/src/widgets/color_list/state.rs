use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use hexman_color::HexColor;

use super::model::{
    ColorList, EntryPhase, EntryViewModel, FEEDBACK_DELAY_MS, Layout,
    MAX_INPUT_LEN,
};

const SHAKE_AMPLITUDE: f32 = 6.0;
const SHAKE_CYCLES: f32 = 3.0;

/// What an entry did with a blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BlurOutcome {
    /// The text parsed and was committed.
    Committed,
    /// The field was empty and silently reverted.
    Reverted,
    /// Malformed text was discarded; carries the rejected input.
    Rejected(String),
}

/// Something the container reports upward after handling a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryReport {
    Committed { index: usize, color: HexColor },
    Rejected { index: usize, input: String },
}

/// Private editing state of one entry.
#[derive(Debug, Clone)]
pub(crate) struct EntryState {
    color: HexColor,
    raw: String,
    invalid: bool,
    shake: bool,
    editing: bool,
    feedback_deadline: Option<Instant>,
    picker_open: bool,
}

impl EntryState {
    /// Mount an entry showing `color`.
    pub(crate) fn new(color: HexColor) -> Self {
        Self {
            raw: color.to_string(),
            color,
            invalid: false,
            shake: false,
            editing: false,
            feedback_deadline: None,
            picker_open: false,
        }
    }

    pub(crate) fn color(&self) -> &HexColor {
        &self.color
    }

    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub(crate) fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub(crate) fn feedback_deadline(&self) -> Option<Instant> {
        self.feedback_deadline
    }

    pub(crate) fn phase(&self) -> EntryPhase {
        if self.shake {
            EntryPhase::Shaking
        } else if self.invalid {
            EntryPhase::EditingInvalidPending
        } else if self.editing {
            EntryPhase::EditingValid
        } else {
            EntryPhase::Idle
        }
    }

    /// Handle a keystroke. Valid text commits immediately.
    pub(crate) fn text_changed(
        &mut self,
        value: String,
        commit: impl FnOnce(HexColor),
    ) {
        if value.chars().count() > MAX_INPUT_LEN {
            return;
        }

        self.raw = value;
        self.editing = true;

        match HexColor::parse(&self.raw) {
            Ok(color) => {
                self.invalid = false;
                self.color = color.clone();
                commit(color);
            },
            Err(_) => {
                if reached_min_length(&self.raw) {
                    self.invalid = true;
                }
            },
        }
    }

    /// Handle focus loss: commit valid text, discard anything else.
    pub(crate) fn blur(
        &mut self,
        now: Instant,
        commit: impl FnOnce(HexColor),
    ) -> BlurOutcome {
        self.editing = false;

        match HexColor::parse(&self.raw) {
            Ok(color) => {
                self.raw = color.to_string();
                self.invalid = false;
                self.color = color.clone();
                commit(color);
                BlurOutcome::Committed
            },
            Err(_) if self.raw.is_empty() => {
                self.raw = self.color.to_string();
                self.invalid = false;
                BlurOutcome::Reverted
            },
            Err(_) => {
                let rejected =
                    std::mem::replace(&mut self.raw, self.color.to_string());
                self.shake = true;
                self.invalid = true;
                // Re-trigger replaces the pending deadline.
                self.feedback_deadline =
                    Some(now + Duration::from_millis(FEEDBACK_DELAY_MS));
                BlurOutcome::Rejected(rejected)
            },
        }
    }

    /// Handle a picker selection. Display is uppercased, the commit is not.
    pub(crate) fn picker_changed(
        &mut self,
        value: HexColor,
        commit: impl FnOnce(HexColor),
    ) {
        self.raw = value.to_uppercase();
        self.color = value.clone();
        self.return_to_idle();
        commit(value);
    }

    /// Follow a color change that did not come from this entry.
    pub(crate) fn sync_external(&mut self, color: &HexColor) -> bool {
        if &self.color == color {
            return false;
        }

        self.reset_to(color);
        true
    }

    /// Show `color` and drop any edit in progress, whatever its state.
    pub(crate) fn reset_to(&mut self, color: &HexColor) {
        self.color = color.clone();
        self.raw = color.to_string();
        self.return_to_idle();
    }

    /// Expire the feedback timer when it is due.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        match self.feedback_deadline {
            Some(deadline) if deadline <= now => {
                self.feedback_deadline = None;
                self.shake = false;
                self.invalid = false;
                true
            },
            _ => false,
        }
    }

    pub(crate) fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Horizontal shake displacement at `now`, zero when not shaking.
    pub(crate) fn shake_offset(&self, now: Option<Instant>) -> f32 {
        let (true, Some(deadline), Some(now)) =
            (self.shake, self.feedback_deadline, now)
        else {
            return 0.0;
        };

        let total = Duration::from_millis(FEEDBACK_DELAY_MS).as_secs_f32();
        let remaining = deadline.saturating_duration_since(now).as_secs_f32();
        let progress = (1.0 - remaining / total).clamp(0.0, 1.0);

        SHAKE_AMPLITUDE
            * (progress * SHAKE_CYCLES * TAU).sin()
            * (1.0 - progress)
    }

    fn return_to_idle(&mut self) {
        self.invalid = false;
        self.shake = false;
        self.editing = false;
        self.feedback_deadline = None;
    }
}

/// Minimum length before malformed text is flagged while typing.
fn reached_min_length(value: &str) -> bool {
    let min_len = if value.starts_with('#') { 4 } else { 3 };
    value.chars().count() >= min_len
}

/// Container state: the authoritative list plus one entry per index.
#[derive(Debug)]
pub(crate) struct ColorListState {
    colors: ColorList,
    entries: Vec<EntryState>,
    focused: Option<usize>,
    layout: Layout,
    grid_columns: usize,
    last_tick: Option<Instant>,
}

impl ColorListState {
    /// Create state with the default palette.
    pub(crate) fn new(layout: Layout, grid_columns: usize) -> Self {
        let colors = ColorList::default();
        let entries =
            colors.colors().iter().cloned().map(EntryState::new).collect();

        Self {
            colors,
            entries,
            focused: None,
            layout,
            grid_columns,
            last_tick: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn colors(&self) -> &ColorList {
        &self.colors
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, index: usize) -> Option<&EntryState> {
        self.entries.get(index)
    }

    #[cfg(test)]
    pub(crate) fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub(crate) fn layout(&self) -> Layout {
        self.layout
    }

    pub(crate) fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    /// Switch layout. Like every other control, this blurs the edited field.
    pub(crate) fn set_layout(
        &mut self,
        layout: Layout,
        now: Instant,
    ) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        self.blur_focused(now, &mut reports);
        self.layout = layout;
        reports
    }

    /// Return whether any entry waits for its feedback deadline.
    pub(crate) fn has_pending_feedback(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.feedback_deadline().is_some())
    }

    /// Route a keystroke to `index`, blurring a previously edited entry.
    pub(crate) fn input_changed(
        &mut self,
        index: usize,
        value: String,
        now: Instant,
    ) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        if self.focused.is_some_and(|focused| focused != index) {
            self.blur_focused(now, &mut reports);
        }
        if index >= self.entries.len() {
            return reports;
        }

        self.focused = Some(index);
        let Self {
            colors, entries, ..
        } = self;
        entries[index].text_changed(value, |color| {
            if colors.update(index, color.clone()) {
                reports.push(EntryReport::Committed { index, color });
            }
        });
        reports
    }

    /// Blur `index` explicitly (Enter in its text field).
    pub(crate) fn input_submitted(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        if self.focused.is_some_and(|focused| focused != index) {
            self.blur_focused(now, &mut reports);
        }
        self.focused = None;
        self.blur_entry(index, now, &mut reports);
        reports
    }

    /// Blur whichever entry was being edited, if any.
    pub(crate) fn blur(&mut self, now: Instant) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        self.blur_focused(now, &mut reports);
        reports
    }

    /// Apply a picker selection. Picking takes focus from any text field.
    pub(crate) fn picker_changed(
        &mut self,
        index: usize,
        value: HexColor,
        now: Instant,
    ) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        self.blur_focused(now, &mut reports);
        if index >= self.entries.len() {
            return reports;
        }

        let Self {
            colors, entries, ..
        } = self;
        entries[index].picker_changed(value, |color| {
            if colors.update(index, color.clone()) {
                reports.push(EntryReport::Committed { index, color });
            }
        });
        reports
    }

    /// Open or close the picker panel of `index`.
    pub(crate) fn toggle_picker(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Vec<EntryReport> {
        let mut reports = Vec::new();
        self.blur_focused(now, &mut reports);
        if let Some(entry) = self.entries.get_mut(index) {
            entry.toggle_picker();
        }
        reports
    }

    /// Restore the default palette. Every entry drops its edit, even one
    /// whose color already matches the default.
    pub(crate) fn reset_palette(&mut self) {
        self.focused = None;
        self.colors.reset();
        for (entry, color) in self.entries.iter_mut().zip(self.colors.colors())
        {
            entry.reset_to(color);
        }
    }

    /// Expire due feedback deadlines.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.last_tick = Some(now);
        for entry in &mut self.entries {
            entry.tick(now);
        }
    }

    /// Push authoritative colors down to entries that are out of date.
    pub(crate) fn sync_entries(&mut self) {
        for (entry, color) in self.entries.iter_mut().zip(self.colors.colors())
        {
            entry.sync_external(color);
        }
    }

    /// Build per-entry view models.
    pub(crate) fn entry_view_models(&self) -> Vec<EntryViewModel<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryViewModel {
                index,
                color: entry.color(),
                raw: entry.raw(),
                is_invalid: entry.is_invalid(),
                phase: entry.phase(),
                shake_offset: entry.shake_offset(self.last_tick),
                is_picker_open: entry.is_picker_open(),
                picker_rgb: entry.color().to_rgb(),
            })
            .collect()
    }

    fn blur_focused(&mut self, now: Instant, reports: &mut Vec<EntryReport>) {
        if let Some(index) = self.focused.take() {
            self.blur_entry(index, now, reports);
        }
    }

    fn blur_entry(
        &mut self,
        index: usize,
        now: Instant,
        reports: &mut Vec<EntryReport>,
    ) {
        let Self {
            colors, entries, ..
        } = self;
        let Some(entry) = entries.get_mut(index) else {
            return;
        };

        let previous = colors.get(index).cloned();
        let outcome = entry.blur(now, |color| {
            colors.update(index, color);
        });

        match outcome {
            BlurOutcome::Committed => {
                let changed = colors
                    .get(index)
                    .filter(|color| previous.as_ref() != Some(*color))
                    .cloned();
                if let Some(color) = changed {
                    reports.push(EntryReport::Committed { index, color });
                }
            },
            BlurOutcome::Reverted => {},
            BlurOutcome::Rejected(input) => {
                reports.push(EntryReport::Rejected { index, input });
            },
        }
    }
}
