use std::collections::HashMap;

use iced::{Point, Rectangle};

use crate::widgets::navigation::MenuId;

/// Answers whether a window point lies inside a rendered menu.
pub(crate) trait RegionHitTest {
    /// `None` when no region is registered for `menu`.
    fn contains(&self, menu: MenuId, point: Point) -> Option<bool>;
}

/// Window-space rectangles of the menus currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MenuRegions {
    regions: HashMap<MenuId, Rectangle>,
}

impl MenuRegions {
    pub(crate) fn insert(&mut self, menu: MenuId, bounds: Rectangle) {
        self.regions.insert(menu, bounds);
    }

    pub(crate) fn get(&self, menu: MenuId) -> Option<Rectangle> {
        self.regions.get(&menu).copied()
    }
}

impl RegionHitTest for MenuRegions {
    fn contains(&self, menu: MenuId, point: Point) -> Option<bool> {
        self.get(menu).map(|bounds| bounds.contains(point))
    }
}

/// Actions to apply to the menu store after a pointer press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Dismissal {
    pub(crate) close: Vec<MenuId>,
    pub(crate) collapse_submenu: bool,
}

impl Dismissal {
    pub(crate) fn is_empty(&self) -> bool {
        self.close.is_empty() && !self.collapse_submenu
    }
}

/// Decide which menus a pointer press at `target` dismisses.
///
/// A press with no known position, or over a menu with no registered region,
/// counts as outside that menu. The submenu collapses only when the press is
/// outside every tracked region.
pub(crate) fn dismissal(
    open_menu: Option<MenuId>,
    target: Option<Point>,
    regions: &impl RegionHitTest,
) -> Dismissal {
    let inside = |menu: MenuId| {
        target
            .and_then(|point| regions.contains(menu, point))
            .unwrap_or(false)
    };

    let close = MenuId::TRACKED
        .into_iter()
        .filter(|menu| open_menu == Some(*menu) && !inside(*menu))
        .collect();
    let collapse_submenu = !MenuId::TRACKED.into_iter().any(inside);

    Dismissal {
        close,
        collapse_submenu,
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size};

    use super::{MenuRegions, RegionHitTest, dismissal};
    use crate::widgets::navigation::MenuId;

    fn regions() -> MenuRegions {
        let mut regions = MenuRegions::default();
        regions.insert(
            MenuId::Tools,
            Rectangle::new(Point::new(400.0, 0.0), Size::new(340.0, 300.0)),
        );
        regions.insert(
            MenuId::Resources,
            Rectangle::new(Point::new(744.0, 0.0), Size::new(120.0, 64.0)),
        );
        regions
    }

    #[test]
    fn given_open_tools_when_pressed_outside_then_tools_closes_and_submenu_collapses()
     {
        let result = dismissal(
            Some(MenuId::Tools),
            Some(Point::new(10.0, 500.0)),
            &regions(),
        );

        assert_eq!(result.close, vec![MenuId::Tools]);
        assert!(result.collapse_submenu);
    }

    #[test]
    fn given_open_tools_when_pressed_inside_then_nothing_changes() {
        let result = dismissal(
            Some(MenuId::Tools),
            Some(Point::new(450.0, 120.0)),
            &regions(),
        );

        assert!(result.is_empty());
    }

    #[test]
    fn given_open_tools_when_pressed_on_resources_trigger_then_only_tools_closes()
     {
        let result = dismissal(
            Some(MenuId::Tools),
            Some(Point::new(800.0, 30.0)),
            &regions(),
        );

        assert_eq!(result.close, vec![MenuId::Tools]);
        assert!(!result.collapse_submenu);
    }

    #[test]
    fn given_unregistered_region_when_pressed_then_press_counts_as_outside() {
        let result = dismissal(
            Some(MenuId::Mobile),
            Some(Point::new(450.0, 120.0)),
            &MenuRegions::default(),
        );

        assert_eq!(result.close, vec![MenuId::Mobile]);
        assert!(result.collapse_submenu);
    }

    #[test]
    fn given_unknown_pointer_position_when_pressed_then_open_menu_closes() {
        let result = dismissal(Some(MenuId::Main), None, &regions());

        assert_eq!(result.close, vec![MenuId::Main]);
        assert!(result.collapse_submenu);
    }

    #[test]
    fn given_open_search_overlay_when_pressed_outside_then_it_stays_open() {
        let result = dismissal(
            Some(MenuId::Search),
            Some(Point::new(10.0, 500.0)),
            &regions(),
        );

        assert!(result.close.is_empty());
        assert!(result.collapse_submenu);
    }

    #[test]
    fn given_registered_region_when_hit_tested_then_bounds_decide() {
        let regions = regions();

        assert_eq!(
            regions.contains(MenuId::Tools, Point::new(401.0, 1.0)),
            Some(true)
        );
        assert_eq!(
            regions.contains(MenuId::Tools, Point::new(10.0, 1.0)),
            Some(false)
        );
        assert_eq!(regions.contains(MenuId::Main, Point::ORIGIN), None);
    }
}
