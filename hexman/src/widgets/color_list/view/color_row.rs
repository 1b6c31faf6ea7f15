use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::hex_input::{self, HexInputProps};
use super::picker_button::{self, PickerButtonProps};
use super::picker_panel::{self, PickerPanelProps};
use super::swatch::{self, SwatchProps};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::{EntryViewModel, entry_label};

pub(crate) const LABEL_WIDTH: f32 = 80.0;
pub(crate) const SWATCH_WIDTH: f32 = 48.0;

const ROW_PADDING_X: f32 = 12.0;
const ROW_PADDING_Y: f32 = 8.0;
const ROW_SPACING: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const SWATCH_HEIGHT: f32 = 30.0;

/// Props for a table row.
pub(crate) struct ColorRowProps<'a> {
    pub(crate) entry: EntryViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one entry as a table row, with the picker panel underneath.
pub(crate) fn view(
    props: ColorRowProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let ColorRowProps { entry, theme } = props;
    let index = entry.index;

    let label = text(entry_label(index))
        .size(LABEL_FONT_SIZE)
        .width(Length::Fixed(LABEL_WIDTH))
        .wrapping(Wrapping::None);
    let preview = swatch::view(SwatchProps {
        index,
        color: entry.color,
        width: Length::Fixed(SWATCH_WIDTH),
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

    let cells = row![label, preview, field, toggle]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    let mut content = column![cells].spacing(ROW_SPACING);
    if let Some(panel) = panel {
        content = content.push(panel);
    }

    container(content)
        .padding([ROW_PADDING_Y, ROW_PADDING_X])
        .width(Length::Fill)
        .style(style::table_row_style(theme, index % 2 == 1))
        .into()
}
