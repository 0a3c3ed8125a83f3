use iced::widget::{Row, button, text};
use iced::{Element, Length, alignment};

use super::super::event::NavigationIntent;
use super::super::model::{MenuId, NavigationViewModel};
use crate::layout::{HEADER_HEIGHT, TRIGGER_SPACING, TRIGGER_WIDTH};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::language::Translator;

/// Props for rendering the desktop dropdown triggers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DesktopBarProps<'a> {
    pub(crate) vm: NavigationViewModel<'a>,
    pub(crate) current_path: &'a str,
    pub(crate) translator: Translator,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render one trigger per desktop menu, in bar order.
pub(crate) fn view(
    props: DesktopBarProps<'_>,
) -> Element<'_, NavigationIntent> {
    MenuId::DESKTOP
        .into_iter()
        .fold(Row::new().spacing(TRIGGER_SPACING), |bar, menu| {
            bar.push(trigger(menu, props))
        })
        .height(Length::Fixed(HEADER_HEIGHT))
        .into()
}

fn trigger<'a>(
    menu: MenuId,
    props: DesktopBarProps<'a>,
) -> Element<'a, NavigationIntent> {
    let is_open = props.vm.is_open(menu);
    let has_current = props
        .vm
        .catalog
        .items(menu)
        .iter()
        .any(|item| item.is_current(props.current_path));
    let chevron = if is_open { "▴" } else { "▾" };

    let label = text(format!(
        "{} {chevron}",
        props.translator.text(menu.label_key())
    ))
    .size(props.fonts.size)
    .font(props.fonts.bold)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    button(label)
        .width(Length::Fixed(TRIGGER_WIDTH))
        .height(Length::Fill)
        .style(menu_style::menu_row_style(props.theme, is_open || has_current))
        .on_press(NavigationIntent::ToggleMenu(menu))
        .into()
}
