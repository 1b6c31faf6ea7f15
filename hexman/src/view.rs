use iced::widget::{column, container, mouse_area, scrollable};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::color_list::ColorListEvent;
use crate::widgets::color_list::view::header::{self, HeaderProps};
use crate::widgets::color_list::view::list::{self, ListProps};

const PAGE_PADDING: f32 = 24.0;
const SECTION_SPACING: f32 = 20.0;
const SCROLL_GUTTER: f32 = 10.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props: ThemeProps<'_> = ThemeProps::new(&app.theme);
    let palette = app.theme.iced_palette().clone();
    let vm = app.widgets.color_list.vm();

    let header_view = header::view(HeaderProps {
        layout: vm.layout,
        theme: theme_props,
    });
    let list_view = list::view(ListProps {
        vm,
        theme: theme_props,
    });

    let body = scrollable::Scrollable::new(
        container(list_view).padding([0.0, SCROLL_GUTTER]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .direction(scrollable::Direction::Vertical(
        scrollable::Scrollbar::new()
            .width(4)
            .margin(0)
            .scroller_width(4),
    ))
    .style(style::thin_scroll_style(palette.clone()));

    let page = container(
        column![header_view, body]
            .spacing(SECTION_SPACING)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(PAGE_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    });

    // Presses that no control captured blur the edited field.
    let page = mouse_area(page).on_press(ColorListEvent::BlurRequested);

    Element::from(page).map(AppEvent::ColorListUi)
}
