use iced::widget::{button, text};
use iced::{Element, Length, Theme, alignment};

use super::labelled;
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::picker_label;

const BUTTON_FONT_SIZE: f32 = 12.0;
const BUTTON_WIDTH: f32 = 56.0;
const BUTTON_PADDING_Y: f32 = 7.0;

/// Props for the button that opens an entry's picker.
pub(crate) struct PickerButtonProps<'a> {
    pub(crate) index: usize,
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: PickerButtonProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let label = if props.is_open { "Done" } else { "Pick" };
    let content = text(label)
        .size(BUTTON_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let toggle = button(content)
        .width(Length::Fixed(BUTTON_WIDTH))
        .padding([BUTTON_PADDING_Y, 0.0])
        .style(style::action_button_style(props.theme))
        .on_press(ColorListEvent::PickerToggled { index: props.index });

    labelled(toggle, picker_label(props.index), props.theme)
}
