use std::time::Instant;

use iced::Task;

use super::command::ColorListCommand;
use super::event::ColorListEffect;
use super::state::{ColorListState, EntryReport};

/// Reduce a color list command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ColorListState,
    command: ColorListCommand,
) -> Task<ColorListEffect> {
    use ColorListCommand as C;

    let now = Instant::now();
    let mut effects = match command {
        C::InputChanged { index, value } => {
            report_effects(state.input_changed(index, value, now))
        },
        C::InputSubmitted { index } => {
            report_effects(state.input_submitted(index, now))
        },
        C::Blur => report_effects(state.blur(now)),
        C::PickerToggled { index } => {
            report_effects(state.toggle_picker(index, now))
        },
        C::PickerChanged { index, value } => {
            report_effects(state.picker_changed(index, value, now))
        },
        C::ResetPalette => {
            state.reset_palette();
            vec![ColorListEffect::PaletteReset]
        },
        C::SetLayout(layout) => report_effects(state.set_layout(layout, now)),
        C::Tick(now) => {
            state.tick(now);
            Vec::new()
        },
    };

    state.sync_entries();

    match effects.len() {
        0 => Task::none(),
        1 => Task::done(effects.remove(0)),
        _ => Task::batch(effects.into_iter().map(Task::done)),
    }
}

fn report_effects(reports: Vec<EntryReport>) -> Vec<ColorListEffect> {
    reports
        .into_iter()
        .map(|report| match report {
            EntryReport::Committed { index, color } => {
                ColorListEffect::Committed { index, color }
            },
            EntryReport::Rejected { index, input } => {
                ColorListEffect::Rejected { index, input }
            },
        })
        .collect()
}
