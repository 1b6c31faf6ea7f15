use hexman_color::{HexColor, Rgb};
use iced::widget::text::Wrapping;
use iced::widget::{column, row, slider, text};
use iced::{Element, Length, Theme, alignment};

use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;

const CHANNEL_FONT_SIZE: f32 = 12.0;
const CHANNEL_LABEL_WIDTH: f32 = 14.0;
const CHANNEL_VALUE_WIDTH: f32 = 28.0;
const CHANNEL_SPACING: f32 = 8.0;
const PANEL_SPACING: f32 = 4.0;

/// Props for the RGB picker panel of one entry.
pub(crate) struct PickerPanelProps<'a> {
    pub(crate) index: usize,
    pub(crate) rgb: Rgb,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one slider per channel. Every move emits a lowercase `#rrggbb`.
pub(crate) fn view(
    props: PickerPanelProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let PickerPanelProps { index, rgb, theme } = props;
    let picked = move |rgb: Rgb| ColorListEvent::PickerChanged {
        index,
        value: HexColor::from_picker(rgb),
    };

    column![
        channel_row("R", rgb.r, move |r| picked(Rgb { r, ..rgb }), theme),
        channel_row("G", rgb.g, move |g| picked(Rgb { g, ..rgb }), theme),
        channel_row("B", rgb.b, move |b| picked(Rgb { b, ..rgb }), theme),
    ]
    .spacing(PANEL_SPACING)
    .width(Length::Fill)
    .into()
}

fn channel_row<'a>(
    label: &'a str,
    value: u8,
    on_change: impl Fn(u8) -> ColorListEvent + 'a,
    theme: ThemeProps<'a>,
) -> Element<'a, ColorListEvent, Theme, iced::Renderer> {
    let dim = theme.theme.iced_palette().dim_foreground;

    let name = text(label)
        .size(CHANNEL_FONT_SIZE)
        .width(Length::Fixed(CHANNEL_LABEL_WIDTH))
        .style(move |_: &Theme| iced::widget::text::Style {
            color: Some(dim),
        });
    let amount = text(value.to_string())
        .size(CHANNEL_FONT_SIZE)
        .width(Length::Fixed(CHANNEL_VALUE_WIDTH))
        .align_x(alignment::Horizontal::Right)
        .wrapping(Wrapping::None);

    row![name, slider(0..=u8::MAX, value, on_change), amount]
        .spacing(CHANNEL_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}
