use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::Layout;

const TITLE: &str = "Hex Color Manager";
const SUBTITLE: &str = "Enter a hex color code or pick one from the palette";

const TITLE_FONT_SIZE: f32 = 24.0;
const SUBTITLE_FONT_SIZE: f32 = 13.0;
const BUTTON_FONT_SIZE: f32 = 12.0;
const BUTTON_PADDING_X: f32 = 10.0;
const BUTTON_PADDING_Y: f32 = 6.0;
const BUTTON_SPACING: f32 = 8.0;
const TITLE_SPACING: f32 = 4.0;

/// Props for the list header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) layout: Layout,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the title block with the layout and reset actions.
pub(crate) fn view(
    props: HeaderProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let dim = props.theme.theme.iced_palette().dim_foreground;

    let titles = column![
        text(TITLE).size(TITLE_FONT_SIZE),
        text(SUBTITLE)
            .size(SUBTITLE_FONT_SIZE)
            .style(move |_: &Theme| iced::widget::text::Style {
                color: Some(dim),
            }),
    ]
    .spacing(TITLE_SPACING);

    let layout_label = match props.layout {
        Layout::Grid => "Table view",
        Layout::Table => "Grid view",
    };
    let actions = row![
        action_button(layout_label, ColorListEvent::LayoutToggled, props),
        action_button("Reset palette", ColorListEvent::ResetPalette, props),
    ]
    .spacing(BUTTON_SPACING);

    row![titles, Space::new().width(Length::Fill), actions]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    event: ColorListEvent,
    props: HeaderProps<'a>,
) -> Element<'a, ColorListEvent, Theme, iced::Renderer> {
    button(text(label).size(BUTTON_FONT_SIZE))
        .padding([BUTTON_PADDING_Y, BUTTON_PADDING_X])
        .style(style::action_button_style(props.theme))
        .on_press(event)
        .into()
}
