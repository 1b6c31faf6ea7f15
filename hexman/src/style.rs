use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Theme};

use crate::theme::{IcedColorPalette, ThemeProps};

const CARD_RADIUS: f32 = 8.0;
const CARD_BORDER: f32 = 2.0;
const SWATCH_RADIUS: f32 = 6.0;
const SWATCH_BORDER: f32 = 2.0;
const INPUT_INVALID_BORDER: f32 = 2.0;

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Card frame used by the grid layout.
pub(crate) fn card_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: CARD_BORDER,
            color: palette.overlay,
            radius: iced::border::Radius::new(CARD_RADIUS),
        },
        ..Default::default()
    }
}

/// Row frame used by the table layout.
pub(crate) fn table_row_style(
    theme: ThemeProps<'_>,
    is_odd: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme| {
        let background = if is_odd {
            palette.surface
        } else {
            palette.background
        };

        container::Style {
            background: Some(background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        }
    }
}

/// Swatch filled with the previewed color.
pub(crate) fn swatch_style(
    fill: Color,
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme| container::Style {
        background: Some(fill.into()),
        border: Border {
            width: SWATCH_BORDER,
            color: palette.overlay,
            radius: iced::border::Radius::new(SWATCH_RADIUS),
        },
        ..Default::default()
    }
}

pub(crate) fn tooltip_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 0.25,
            color: palette.overlay,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}

/// Hex field style, switching to a destructive border while invalid.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
    is_invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.selection = palette.dim_blue;
        if is_invalid {
            style.border = Border {
                width: INPUT_INVALID_BORDER,
                color: palette.red,
                ..style.border
            };
        }
        style
    }
}

pub(crate) fn action_button_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, ButtonStatus) -> button::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme, status| button_style(&palette, status)
}

fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let (background, text_color) = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            (palette.dim_blue, palette.dim_black)
        },
        ButtonStatus::Disabled => {
            let mut color = palette.overlay;
            color.a = 0.4;
            (color, palette.dim_foreground)
        },
        ButtonStatus::Active => (palette.overlay, palette.foreground),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            width: 0.0,
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
