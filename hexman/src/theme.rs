use hexman_color::Rgb;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette for the application chrome (not the edited palette).
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_foreground: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            surface: String::from("#1C1F2A"),
            overlay: String::from("#232530"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            // DIM COLORS
            dim_blue: String::from("#2F638F"),
            dim_black: String::from("#0F1115"),
            dim_foreground: String::from("#6B7280"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_foreground: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            overlay: parse_hex_color(&p.overlay),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_foreground: parse_hex_color(&p.dim_foreground),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();
        let iced_palette = IcedColorPalette::from(&raw_palette);

        Self {
            id: String::from("default"),
            iced_palette,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> View.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Convert a canonical `#rrggbb` value into an iced color.
///
/// Malformed values render black instead of panicking.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    value
        .parse::<Rgb>()
        .map(|c| Color::from_rgb8(c.r, c.g, c.b))
        .unwrap_or(Color::BLACK)
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::parse_hex_color;

    #[test]
    fn given_canonical_hex_when_parsed_then_returns_matching_color() {
        assert_eq!(
            parse_hex_color("#FF5733"),
            Color::from_rgb8(0xFF, 0x57, 0x33)
        );
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_falls_back_to_black() {
        assert_eq!(parse_hex_color("#F00"), Color::BLACK);
        assert_eq!(parse_hex_color("nope"), Color::BLACK);
    }
}
