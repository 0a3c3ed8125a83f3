use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use super::super::event::NavigationIntent;
use crate::layout::{BRAND_WIDTH, COMPACT_BRAND_WIDTH, HEADER_HEIGHT};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::language::Translator;
use crate::widgets::router::model::HOME_ROUTE;

const BRAND_SIZE_SCALE: f32 = 1.2;

/// Props for rendering the brand link.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrandProps<'a> {
    pub(crate) is_compact: bool,
    pub(crate) translator: Translator,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the site brand. Pressing it navigates home.
pub(crate) fn view(props: BrandProps<'_>) -> Element<'_, NavigationIntent> {
    let (label_key, width) = if props.is_compact {
        ("brandShort", COMPACT_BRAND_WIDTH)
    } else {
        ("brand", BRAND_WIDTH)
    };

    let label = text(props.translator.text(label_key))
        .size(props.fonts.size * BRAND_SIZE_SCALE)
        .font(props.fonts.bold)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    button(label)
        .width(Length::Fixed(width))
        .height(Length::Fixed(HEADER_HEIGHT))
        .style(menu_style::menu_row_style(props.theme, false))
        .on_press(NavigationIntent::ItemSelected {
            href: String::from(HOME_ROUTE),
        })
        .into()
}
