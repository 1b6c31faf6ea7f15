use iced::widget::text::Wrapping;
use iced::widget::{Column, Row, Space, Text, container, row, text};
use iced::{Element, Length, Theme};

use super::color_card::{self, ColorCardProps};
use super::color_row::{self, ColorRowProps, LABEL_WIDTH, SWATCH_WIDTH};
use crate::theme::ThemeProps;
use crate::widgets::color_list::event::ColorListEvent;
use crate::widgets::color_list::model::{ColorListViewModel, Layout};

const GRID_SPACING: f32 = 12.0;
const HEADING_FONT_SIZE: f32 = 11.0;
const HEADING_PADDING_X: f32 = 12.0;
const HEADING_SPACING: f32 = 12.0;

/// Props for the list body.
pub(crate) struct ListProps<'a> {
    pub(crate) vm: ColorListViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render every entry in the active layout.
pub(crate) fn view(
    props: ListProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    match props.vm.layout {
        Layout::Grid => grid(props),
        Layout::Table => table(props),
    }
}

fn grid(
    props: ListProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let ListProps { vm, theme } = props;
    let columns = vm.grid_columns.max(1);

    let mut rows = Column::new().spacing(GRID_SPACING);
    let mut cards: Vec<Element<'_, ColorListEvent, Theme, iced::Renderer>> =
        Vec::with_capacity(columns);

    for entry in vm.entries {
        cards.push(color_card::view(ColorCardProps { entry, theme }));
        if cards.len() == columns {
            rows = rows.push(
                Row::with_children(std::mem::take(&mut cards))
                    .spacing(GRID_SPACING),
            );
        }
    }

    if !cards.is_empty() {
        while cards.len() < columns {
            cards.push(Space::new().width(Length::Fill).into());
        }
        rows = rows.push(Row::with_children(cards).spacing(GRID_SPACING));
    }

    rows.width(Length::Fill).into()
}

fn table(
    props: ListProps<'_>,
) -> Element<'_, ColorListEvent, Theme, iced::Renderer> {
    let ListProps { vm, theme } = props;
    let dim = theme.theme.iced_palette().dim_foreground;
    let heading = move |label: &'static str| -> Text<'static, Theme> {
        text(label)
            .size(HEADING_FONT_SIZE)
            .wrapping(Wrapping::None)
            .style(move |_: &Theme| iced::widget::text::Style {
                color: Some(dim),
            })
    };

    let headings = container(
        row![
            heading("Name").width(Length::Fixed(LABEL_WIDTH)),
            heading("Preview").width(Length::Fixed(SWATCH_WIDTH)),
            heading("Hex").width(Length::Fill),
        ]
        .spacing(HEADING_SPACING),
    )
    .padding([0.0, HEADING_PADDING_X]);

    let mut rows = Column::new().push(headings);
    for entry in vm.entries {
        rows = rows.push(color_row::view(ColorRowProps { entry, theme }));
    }

    rows.width(Length::Fill).into()
}
