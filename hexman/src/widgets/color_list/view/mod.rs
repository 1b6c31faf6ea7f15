pub(crate) mod color_card;
pub(crate) mod color_row;
pub(crate) mod header;
pub(crate) mod hex_input;
pub(crate) mod list;
pub(crate) mod picker_button;
pub(crate) mod picker_panel;
pub(crate) mod swatch;

use iced::widget::{container, text, tooltip};
use iced::{Element, Theme};

use super::event::ColorListEvent;
use crate::style;
use crate::theme::ThemeProps;

const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_PADDING: f32 = 6.0;

/// Attach a descriptive hover label to an element.
fn labelled<'a>(
    content: impl Into<Element<'a, ColorListEvent, Theme, iced::Renderer>>,
    label: String,
    theme: ThemeProps<'a>,
) -> Element<'a, ColorListEvent, Theme, iced::Renderer> {
    let tip = container(text(label).size(LABEL_FONT_SIZE))
        .padding(LABEL_PADDING)
        .style(style::tooltip_style(theme));

    tooltip(content, tip, tooltip::Position::Top).into()
}
