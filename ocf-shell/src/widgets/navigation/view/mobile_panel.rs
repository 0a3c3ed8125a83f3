use iced::widget::container;
use iced::{Element, Length, Padding, alignment};

use super::super::event::NavigationIntent;
use super::super::model::MenuId;
use super::menu_rows::{self, MenuRowsProps};
use crate::layout::{MENU_PADDING, mobile_panel_bounds};
use crate::shared::ui::menu_style;

/// Props for rendering the open mobile navigation panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MobilePanelProps<'a> {
    pub(crate) rows: MenuRowsProps<'a>,
    pub(crate) window_width: f32,
}

/// Render the full-width accordion panel under the header.
pub(crate) fn view(
    props: MobilePanelProps<'_>,
) -> Element<'_, NavigationIntent> {
    let rows = MenuRowsProps {
        menu: MenuId::Mobile,
        ..props.rows
    };
    let bounds = mobile_panel_bounds(
        props.window_width,
        rows.vm.visible_rows(MenuId::Mobile),
    );

    let panel = container(menu_rows::view(rows))
        .padding(MENU_PADDING)
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .style(menu_style::menu_panel_style(rows.theme));

    container(panel)
        .padding(Padding {
            top: bounds.y,
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .into()
}
