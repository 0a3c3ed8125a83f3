use iced::theme::Palette;
use iced::{Color, Theme};

/// Resolved colors used by the shell views.
#[derive(Debug, Clone)]
pub(crate) struct ShellPalette {
    pub(crate) background: Color,
    pub(crate) header: Color,
    pub(crate) overlay: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) border: Color,
    pub(crate) badge: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
}

impl Default for ShellPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0B, 0x0F, 0x19),
            header: Color::from_rgb8(0x11, 0x18, 0x27),
            overlay: Color::from_rgb8(0x1F, 0x29, 0x37),
            foreground: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            dim_foreground: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            accent: Color::from_rgb8(0x3B, 0x82, 0xF6),
            accent_hover: Color::from_rgb8(0x60, 0xA5, 0xFA),
            border: Color::from_rgb8(0x37, 0x41, 0x51),
            badge: Color::from_rgb8(0x10, 0xB9, 0x81),
            danger: Color::from_rgb8(0xEF, 0x44, 0x44),
            warning: Color::from_rgb8(0xF5, 0x9E, 0x0B),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    palette: ShellPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("ocf-dark"),
            palette: ShellPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.badge,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &ShellPalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed from the app view down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a ShellPalette {
        self.theme.palette()
    }
}
