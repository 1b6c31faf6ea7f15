use iced::Task;
use iced::keyboard::{self, Key, key::Named};

use crate::app::{App, AppEvent};
use crate::routers::color_list;
use crate::widgets::color_list::ColorListCommand;

/// Route global keyboard events. Tab and Escape move focus out of the
/// edited hex field.
pub(crate) fn route_keyboard(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    if is_focus_leaving_event(&event) {
        return color_list::route_command(app, ColorListCommand::Blur);
    }

    Task::none()
}

/// Return whether a key press should blur the edited hex field.
///
/// Text inputs capture Escape, so callers must not filter on event status.
pub(crate) fn is_focus_leaving_event(event: &keyboard::Event) -> bool {
    match event {
        keyboard::Event::KeyPressed { key, .. } => is_focus_leaving_key(key),
        _ => false,
    }
}

fn is_focus_leaving_key(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Tab | Named::Escape))
}

#[cfg(test)]
mod tests {
    use iced::keyboard::Key;
    use iced::keyboard::key::Named;

    use super::is_focus_leaving_key;

    #[test]
    fn given_tab_or_escape_when_checked_then_focus_leaves_field() {
        assert!(is_focus_leaving_key(&Key::Named(Named::Tab)));
        assert!(is_focus_leaving_key(&Key::Named(Named::Escape)));
    }

    #[test]
    fn given_editing_keys_when_checked_then_focus_stays() {
        assert!(!is_focus_leaving_key(&Key::Named(Named::Enter)));
        assert!(!is_focus_leaving_key(&Key::Named(Named::Backspace)));
        assert!(!is_focus_leaving_key(&Key::Character("a".into())));
    }
}
