use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::color_list::model::{Layout, entry_label};
use crate::widgets::color_list::{
    ColorListCommand, ColorListEffect, ColorListEvent,
};

/// Route a color list UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ColorListEvent,
) -> Task<AppEvent> {
    let layout = app.widgets.color_list.layout();
    let command = map_event_to_command(event, layout);
    route_command(app, command)
}

/// Route a color list command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: ColorListCommand,
) -> Task<AppEvent> {
    app.widgets
        .color_list
        .reduce(command)
        .map(AppEvent::ColorListEffect)
}

/// Route a color list effect event to app-level tasks.
pub(crate) fn route_effect(effect: ColorListEffect) -> Task<AppEvent> {
    use ColorListEffect::*;

    match effect {
        Committed { index, color } => {
            log::debug!("{} committed {color}", entry_label(index));
        },
        Rejected { index, input } => {
            log::debug!(
                "{} rejected malformed input {input:?}",
                entry_label(index)
            );
        },
        PaletteReset => log::info!("palette reset to defaults"),
    }

    Task::none()
}

fn map_event_to_command(
    event: ColorListEvent,
    layout: Layout,
) -> ColorListCommand {
    use {ColorListCommand as C, ColorListEvent as E};

    match event {
        E::InputChanged { index, value } => C::InputChanged { index, value },
        E::InputSubmitted { index } => C::InputSubmitted { index },
        E::BlurRequested => C::Blur,
        E::PickerToggled { index } => C::PickerToggled { index },
        E::PickerChanged { index, value } => C::PickerChanged { index, value },
        E::ResetPalette => C::ResetPalette,
        E::LayoutToggled => C::SetLayout(layout.toggled()),
        E::Tick(now) => C::Tick(now),
    }
}
