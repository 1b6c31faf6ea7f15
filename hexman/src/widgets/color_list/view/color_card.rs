use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::hex_input::{self, HexInputProps};
use super::picker_button::{self, PickerButtonProps};
use super::picker_panel::{self, PickerPanelProps};
use super::swatch::{self, SwatchProps};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::{EntryViewModel, entry_label};

const CARD_PADDING: f32 = 12.0;
const CARD_SPACING: f32 = 10.0;
const CONTROL_SPACING: f32 = 8.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const SWATCH_HEIGHT: f32 = 72.0;

/// Props for a grid card.
pub(crate) struct ColorCardProps<'a> {
    pub(crate) entry: EntryViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one entry as a card: label, large swatch, field and picker.
pub(crate) fn view(
    props: ColorCardProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let ColorCardProps { entry, theme } = props;
    let index = entry.index;

    let preview = swatch::view(SwatchProps {
        index,
        color: entry.color,
        width: Length::Fill,
        height: SWATCH_HEIGHT,
        theme,
    });
    let toggle = picker_button::view(PickerButtonProps {
        index,
        is_open: entry.is_picker_open,
        theme,
    });
    let panel = entry.is_picker_open.then(|| {
        picker_panel::view(PickerPanelProps {
            index,
            rgb: entry.picker_rgb,
            theme,
        })
    });
    let field = hex_input::view(HexInputProps { entry, theme });

    let controls = row![field, toggle]
        .spacing(CONTROL_SPACING)
        .align_y(alignment::Vertical::Top);

    let mut content: Column<'_, ColorListEvent, Theme, iced::Renderer> =
        column![
            text(entry_label(index)).size(LABEL_FONT_SIZE),
            preview,
            controls,
        ]
        .spacing(CARD_SPACING);
    if let Some(panel) = panel {
        content = content.push(panel);
    }

    container(content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(style::card_style(theme))
        .into()
}
