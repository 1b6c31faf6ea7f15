use iced::widget::{column, container, text, text_input};
use iced::{Element, Length, Padding, Theme};

use super::labelled;
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::{
    EntryPhase, EntryViewModel, INPUT_PLACEHOLDER, INVALID_FORMAT_MESSAGE,
    input_label,
};

const INPUT_FONT_SIZE: f32 = 14.0;
const INPUT_PADDING_X: f32 = 8.0;
const INPUT_PADDING_Y: f32 = 6.0;
const ALERT_FONT_SIZE: f32 = 11.0;
const FIELD_SPACING: f32 = 4.0;

/// Props for the hex text field of one entry.
pub(crate) struct HexInputProps<'a> {
    pub(crate) entry: EntryViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the hex field with its invalid styling, shake and alert text.
pub(crate) fn view(
    props: HexInputProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let entry = props.entry;
    let index = entry.index;

    let input = text_input(INPUT_PLACEHOLDER, entry.raw)
        .on_input(move |value| ColorListEvent::InputChanged { index, value })
        .on_submit(ColorListEvent::InputSubmitted { index })
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .size(INPUT_FONT_SIZE)
        .width(Length::Fill)
        .style(style::text_input_style(props.theme, entry.is_invalid));

    let offset = match entry.phase {
        EntryPhase::Shaking => entry.shake_offset,
        _ => 0.0,
    };
    let shifted = container(labelled(input, input_label(index), props.theme))
        .width(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: (-offset).max(0.0),
            bottom: 0.0,
            left: offset.max(0.0),
        });

    let mut field = column![shifted].spacing(FIELD_SPACING);
    if entry.is_invalid {
        let color = props.theme.theme.iced_palette().red;
        field = field.push(
            text(INVALID_FORMAT_MESSAGE)
                .size(ALERT_FONT_SIZE)
                .style(move |_: &Theme| iced::widget::text::Style {
                    color: Some(color),
                }),
        );
    }

    field.width(Length::Fill).into()
}
