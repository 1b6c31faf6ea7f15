use hexman_color::HexColor;
use iced::widget::{Space, container};
use iced::{Element, Length, Theme};

use super::labelled;
use crate::style;
use crate::theme::{ThemeProps, parse_hex_color};
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::preview_label;

/// Props for the color preview swatch.
pub(crate) struct SwatchProps<'a> {
    pub(crate) index: usize,
    pub(crate) color: &'a HexColor,
    pub(crate) width: Length,
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a swatch filled with the committed color of an entry.
pub(crate) fn view(
    props: SwatchProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let fill = parse_hex_color(props.color.as_str());

    let swatch = container(Space::new())
        .width(props.width)
        .height(Length::Fixed(props.height))
        .style(style::swatch_style(fill, props.theme));

    labelled(swatch, preview_label(props.index, props.color), props.theme)
}
