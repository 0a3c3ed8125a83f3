use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use super::super::event::NavigationIntent;
use super::super::model::MenuId;
use crate::layout::MOBILE_TOGGLE_SIZE;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;

/// Props for rendering the hamburger toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MobileToggleProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

pub(crate) fn view(
    props: MobileToggleProps<'_>,
) -> Element<'_, NavigationIntent> {
    let glyph = if props.is_open { "✕" } else { "☰" };

    button(
        text(glyph)
            .size(props.fonts.size * 1.4)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(MOBILE_TOGGLE_SIZE))
    .height(Length::Fixed(MOBILE_TOGGLE_SIZE))
    .style(menu_style::menu_row_style(props.theme, props.is_open))
    .on_press(NavigationIntent::ToggleMenu(MenuId::Mobile))
    .into()
}
