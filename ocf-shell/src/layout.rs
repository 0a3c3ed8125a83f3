use iced::{Point, Rectangle, Size};

use crate::widgets::navigation::{MenuId, NavigationViewModel};
use crate::widgets::pointer_watch::model::MenuRegions;
use crate::widgets::viewport::ViewportClass;

pub(crate) const HEADER_HEIGHT: f32 = 64.0;
pub(crate) const HEADER_PADDING_X: f32 = 16.0;
pub(crate) const BRAND_WIDTH: f32 = 260.0;
pub(crate) const COMPACT_BRAND_WIDTH: f32 = 96.0;
pub(crate) const BRAND_GAP: f32 = 16.0;
pub(crate) const TRIGGER_WIDTH: f32 = 120.0;
pub(crate) const TRIGGER_SPACING: f32 = 4.0;
pub(crate) const DROPDOWN_WIDTH: f32 = 340.0;
pub(crate) const MENU_ROW_HEIGHT: f32 = 48.0;
pub(crate) const MENU_PADDING: f32 = 8.0;
pub(crate) const MOBILE_TOGGLE_SIZE: f32 = 40.0;

/// Bounds of a desktop dropdown trigger in the header bar.
pub(crate) fn trigger_bounds(menu: MenuId) -> Option<Rectangle> {
    let index = MenuId::DESKTOP.iter().position(|entry| *entry == menu)?;
    let x = HEADER_PADDING_X
        + BRAND_WIDTH
        + BRAND_GAP
        + index as f32 * (TRIGGER_WIDTH + TRIGGER_SPACING);

    Some(Rectangle::new(
        Point::new(x, 0.0),
        Size::new(TRIGGER_WIDTH, HEADER_HEIGHT),
    ))
}

/// Height of a menu panel showing `rows` entries.
pub(crate) fn panel_height(rows: usize) -> f32 {
    rows as f32 * MENU_ROW_HEIGHT + 2.0 * MENU_PADDING
}

/// Bounds of a desktop dropdown, anchored under its trigger.
pub(crate) fn dropdown_bounds(menu: MenuId, rows: usize) -> Option<Rectangle> {
    let trigger = trigger_bounds(menu)?;

    Some(Rectangle::new(
        Point::new(trigger.x, HEADER_HEIGHT),
        Size::new(DROPDOWN_WIDTH, panel_height(rows)),
    ))
}

/// Bounds of the hamburger toggle, right-aligned in the header.
pub(crate) fn mobile_toggle_bounds(window_width: f32) -> Rectangle {
    let x = (window_width - HEADER_PADDING_X - MOBILE_TOGGLE_SIZE).max(0.0);
    let y = (HEADER_HEIGHT - MOBILE_TOGGLE_SIZE) / 2.0;

    Rectangle::new(
        Point::new(x, y),
        Size::new(MOBILE_TOGGLE_SIZE, MOBILE_TOGGLE_SIZE),
    )
}

/// Bounds of the full-width mobile panel under the header.
pub(crate) fn mobile_panel_bounds(window_width: f32, rows: usize) -> Rectangle {
    Rectangle::new(
        Point::new(0.0, HEADER_HEIGHT),
        Size::new(window_width.max(0.0), panel_height(rows)),
    )
}

/// Compute the regions of the menus rendered for the current layout.
///
/// Desktop registers each dropdown trigger, joined with its panel while the
/// menu is open. The narrow layout registers the mobile toggle, joined with
/// the panel while it is open.
pub(crate) fn menu_regions(
    vm: &NavigationViewModel<'_>,
    class: ViewportClass,
    window_width: f32,
) -> MenuRegions {
    let mut regions = MenuRegions::default();

    if class.is_narrow_nav {
        let toggle = mobile_toggle_bounds(window_width);
        let bounds = if vm.is_open(MenuId::Mobile) {
            let rows = vm.visible_rows(MenuId::Mobile);
            toggle.union(&mobile_panel_bounds(window_width, rows))
        } else {
            toggle
        };
        regions.insert(MenuId::Mobile, bounds);
        return regions;
    }

    for menu in MenuId::DESKTOP {
        let Some(trigger) = trigger_bounds(menu) else {
            continue;
        };
        let bounds = if vm.is_open(menu) {
            dropdown_bounds(menu, vm.visible_rows(menu))
                .map_or(trigger, |dropdown| trigger.union(&dropdown))
        } else {
            trigger
        };
        regions.insert(menu, bounds);
    }

    regions
}
