use iced::widget::pick_list;
use iced::{Element, Length};

use super::super::event::LanguageIntent;
use super::super::model::Language;
use crate::shared::ui::fonts::FontsConfig;

const PICKER_WIDTH: f32 = 112.0;
const PICKER_PADDING: f32 = 6.0;

/// Props for rendering the language picker.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LanguagePickerProps<'a> {
    pub(crate) active: Language,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a drop-down list of the supported languages.
pub(crate) fn view<'a>(
    props: LanguagePickerProps<'a>,
) -> Element<'a, LanguageIntent> {
    pick_list(Language::ALL, Some(props.active), LanguageIntent::Select)
        .text_size(props.fonts.small_size)
        .padding(PICKER_PADDING)
        .width(Length::Fixed(PICKER_WIDTH))
        .into()
}
