use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use super::super::event::NavigationIntent;
use super::super::model::MenuId;
use crate::layout::MOBILE_TOGGLE_SIZE;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;

/// Props for rendering the search panel toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchToggleProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the magnifier button that opens or closes the search panel.
pub(crate) fn view(
    props: SearchToggleProps<'_>,
) -> Element<'_, NavigationIntent> {
    let intent = if props.is_open {
        NavigationIntent::CloseMenu(MenuId::Search)
    } else {
        NavigationIntent::OpenMenu(MenuId::Search)
    };

    button(
        text("⌕")
            .size(props.fonts.size * 1.4)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(MOBILE_TOGGLE_SIZE))
    .height(Length::Fixed(MOBILE_TOGGLE_SIZE))
    .style(menu_style::menu_row_style(props.theme, props.is_open))
    .on_press(intent)
    .into()
}
