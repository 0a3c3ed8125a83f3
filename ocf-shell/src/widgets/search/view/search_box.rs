use iced::widget::{button, row, text, text_input};
use iced::{Element, Length, alignment};

use super::super::event::SearchIntent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;

const INPUT_PADDING: f32 = 8.0;
const BOX_SPACING: f32 = 6.0;

/// Props for rendering a search input with its submit button.
#[derive(Debug, Clone)]
pub(crate) struct SearchBoxProps<'a> {
    pub(crate) query: &'a str,
    pub(crate) placeholder: String,
    pub(crate) submit_label: String,
    pub(crate) width: Length,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the search input. Enter and the button both submit.
pub(crate) fn view<'a>(props: SearchBoxProps<'a>) -> Element<'a, SearchIntent> {
    let input = text_input(&props.placeholder, props.query)
        .on_input(SearchIntent::QueryChanged)
        .on_submit(SearchIntent::Submit)
        .padding(INPUT_PADDING)
        .size(props.fonts.size)
        .width(Length::Fill);

    let submit = button(
        text(props.submit_label)
            .size(props.fonts.small_size)
            .font(props.fonts.bold),
    )
    .padding(INPUT_PADDING)
    .style(menu_style::primary_button_style(props.theme))
    .on_press(SearchIntent::Submit);

    row![input, submit]
        .spacing(BOX_SPACING)
        .width(props.width)
        .align_y(alignment::Vertical::Center)
        .into()
}
