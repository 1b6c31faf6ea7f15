use std::time::Duration;

use iced::event::{self, Status};
use iced::{Event, Subscription, window};

use crate::app::{App, AppEvent};
use crate::routers::keyboard::is_focus_leaving_event;
use crate::widgets::color_list::ColorListEvent;
use crate::widgets::color_list::model::FEEDBACK_TICK_MS;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Captured events included: the hex field swallows Escape.
    let key_subs = event::listen_with(focus_key_event);

    let mut subs = vec![key_subs];

    // Drive shake animation and expire feedback deadlines.
    if app.widgets.color_list.has_pending_feedback() {
        let tick = iced::time::every(Duration::from_millis(FEEDBACK_TICK_MS))
            .map(|now| AppEvent::ColorListUi(ColorListEvent::Tick(now)));
        subs.push(tick);
    }

    Subscription::batch(subs)
}

fn focus_key_event(
    event: Event,
    _status: Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Keyboard(event) if is_focus_leaving_event(&event) => {
            Some(AppEvent::Keyboard(event))
        },
        _ => None,
    }
}
