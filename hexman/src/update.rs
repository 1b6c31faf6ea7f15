use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Color list widget
        AppEvent::ColorListUi(event) => {
            routers::color_list::route_event(app, event)
        },
        AppEvent::ColorListEffect(effect) => {
            routers::color_list::route_effect(effect)
        },
        // Direct operations
        AppEvent::Keyboard(event) => {
            routers::keyboard::route_keyboard(app, event)
        },
    }
}
