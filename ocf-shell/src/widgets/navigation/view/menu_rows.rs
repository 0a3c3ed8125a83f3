use iced::widget::{Column, Space, button, column, row, text};
use iced::{Element, Length, alignment};

use super::super::event::NavigationIntent;
use super::super::model::{
    MenuId, MenuItem, MenuItemKind, NavigationViewModel,
};
use crate::layout::MENU_ROW_HEIGHT;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::language::Translator;

const ROW_PADDING_X: f32 = 12.0;
const CHILD_INDENT: f32 = 20.0;
const ICON_WIDTH: f32 = 20.0;
const ROW_SPACING: f32 = 8.0;

/// Props for rendering the entries of one menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuRowsProps<'a> {
    pub(crate) menu: MenuId,
    pub(crate) vm: NavigationViewModel<'a>,
    pub(crate) current_path: &'a str,
    pub(crate) translator: Translator,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the rows of a menu with the expanded submenu inlined.
///
/// Every row has the same fixed height so the panel size can be computed
/// from [`NavigationViewModel::visible_rows`].
pub(crate) fn view(props: MenuRowsProps<'_>) -> Element<'_, NavigationIntent> {
    let mut rows = Column::new().width(Length::Fill);

    for item in props.vm.catalog.items(props.menu) {
        rows = rows.push(item_row(item, 0.0, props));

        if let MenuItemKind::Branch { children } = item.kind() {
            if props.vm.is_expanded(item.name()) {
                for child in children {
                    rows = rows.push(item_row(child, CHILD_INDENT, props));
                }
            }
        }
    }

    rows.into()
}

fn item_row<'a>(
    item: &'a MenuItem,
    indent: f32,
    props: MenuRowsProps<'a>,
) -> Element<'a, NavigationIntent> {
    let palette = props.theme.palette();
    let is_current = item.is_current(props.current_path);
    let label = props.translator.label(item.label_key(), item.name());

    let icon = text(item.icon().map_or("", |icon| icon.glyph()))
        .size(props.fonts.size)
        .width(Length::Fixed(ICON_WIDTH));

    let mut title = row![
        text(label).size(props.fonts.size).font(if is_current {
            props.fonts.bold
        } else {
            props.fonts.regular
        })
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);
    if let Some(badge) = item.badge() {
        title = title.push(
            text(badge.to_string())
                .size(props.fonts.small_size)
                .color(palette.badge),
        );
    }

    let mut label_column = column![title].width(Length::Fill);
    if let Some(description) = item.description() {
        label_column = label_column.push(
            text(description.to_string())
                .size(props.fonts.small_size)
                .color(palette.dim_foreground),
        );
    }

    let (trailing, on_press) = match item.kind() {
        MenuItemKind::Leaf { href } => (
            "",
            NavigationIntent::ItemSelected {
                href: href.to_string(),
            },
        ),
        MenuItemKind::Branch { .. } => (
            if props.vm.is_expanded(item.name()) {
                "▴"
            } else {
                "▾"
            },
            NavigationIntent::ToggleSubmenu(item.name().to_string()),
        ),
    };

    let content = row![
        Space::new().width(Length::Fixed(indent)),
        icon,
        label_column,
        text(trailing).size(props.fonts.size),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center)
    .height(Length::Fill);

    button(content)
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .style(menu_style::menu_row_style(props.theme, is_current))
        .on_press(on_press)
        .into()
}
