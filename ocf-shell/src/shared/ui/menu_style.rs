use iced::widget::{button, container};
use iced::{Background, Border, Color};

use super::theme::ThemeProps;

const PANEL_RADIUS: f32 = 6.0;

/// Return a styled container closure for dropdown and mobile panels.
pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: PANEL_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Return a styled container closure for the header bar.
pub(crate) fn header_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.header.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Return a button style for menu rows and triggers.
///
/// `highlighted` marks the open trigger or the entry of the current route.
pub(crate) fn menu_row_style(
    theme: ThemeProps<'_>,
    highlighted: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    let palette = theme.palette().clone();
    move |_theme: &iced::Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette.background))
            },
            _ if highlighted => Some(Background::Color(palette.background)),
            _ => None,
        };
        let text_color = if highlighted {
            palette.accent_hover
        } else {
            palette.foreground
        };

        button::Style {
            background,
            text_color,
            border: Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Return a button style for primary actions.
pub(crate) fn primary_button_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    let palette = theme.palette().clone();
    move |_theme: &iced::Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.accent_hover
            },
            _ => palette.accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}
