use iced::widget::container;
use iced::{Element, Length, Padding, alignment};

use super::super::event::NavigationIntent;
use super::menu_rows::{self, MenuRowsProps};
use crate::layout::{DROPDOWN_WIDTH, MENU_PADDING, dropdown_bounds};
use crate::shared::ui::menu_style;

/// Props for rendering an open desktop dropdown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DropdownProps<'a> {
    pub(crate) rows: MenuRowsProps<'a>,
}

/// Render the dropdown panel positioned under its trigger.
pub(crate) fn view(props: DropdownProps<'_>) -> Element<'_, NavigationIntent> {
    let rows = props.rows;
    let visible_rows = rows.vm.visible_rows(rows.menu);
    let Some(bounds) = dropdown_bounds(rows.menu, visible_rows) else {
        return container(iced::widget::Space::new()).into();
    };

    let panel = container(menu_rows::view(rows))
        .padding(MENU_PADDING)
        .width(Length::Fixed(DROPDOWN_WIDTH))
        .height(Length::Fixed(bounds.height))
        .style(menu_style::menu_panel_style(rows.theme));

    container(panel)
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .into()
}
