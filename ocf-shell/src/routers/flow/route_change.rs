use iced::Task;

use crate::app::{AppEvent, Widgets};
use crate::widgets::navigation::NavigationIntent;
use crate::widgets::pages::PagesIntent;
use crate::widgets::router::RouteKey;
use crate::widgets::search::SearchIntent;

/// Reset the shell after a completed navigation and show the new page.
///
/// Every menu closes, the search panel included, and the search input is
/// cleared.
pub(crate) fn reset(widgets: &mut Widgets, route: &RouteKey) -> Task<AppEvent> {
    log::debug!("resetting navigation shell for {route}");

    let navigation = widgets
        .navigation
        .reduce(NavigationIntent::CloseAll)
        .map(AppEvent::Navigation);
    let search = widgets
        .search
        .reduce(SearchIntent::Clear)
        .map(AppEvent::Search);
    let pages = widgets
        .pages
        .reduce(PagesIntent::Show {
            route: route.clone(),
        })
        .map(AppEvent::Pages);

    Task::batch([navigation, search, pages])
}

#[cfg(test)]
mod tests {
    use super::reset;
    use crate::app::Widgets;
    use crate::widgets::navigation::{MenuId, NavigationIntent};
    use crate::widgets::pages::model::PageView;
    use crate::widgets::router::RouteKey;
    use crate::widgets::search::SearchIntent;

    #[test]
    fn given_menus_submenu_and_search_text_when_route_changes_then_everything_resets()
     {
        let mut widgets = Widgets::for_tests();
        let _task = widgets
            .navigation
            .reduce(NavigationIntent::OpenMenu(MenuId::Mobile));
        let _task = widgets
            .navigation
            .reduce(NavigationIntent::ToggleSubmenu(String::from("Legal")));
        let _task = widgets
            .search
            .reduce(SearchIntent::QueryChanged(String::from("wallet")));

        let _task = reset(&mut widgets, &RouteKey::new("/manifesto"));

        let vm = widgets.navigation.vm();
        assert_eq!(vm.open_menu, None);
        assert_eq!(vm.expanded_submenu, None);
        assert_eq!(widgets.search.query(), "");
        assert!(matches!(
            widgets.pages.vm().page,
            PageView::Page(page) if page.route == "/manifesto"
        ));
    }

    #[test]
    fn given_open_search_panel_when_route_changes_then_panel_closes() {
        let mut widgets = Widgets::for_tests();
        let _task = widgets
            .navigation
            .reduce(NavigationIntent::OpenMenu(MenuId::Search));

        let _task = reset(&mut widgets, &RouteKey::new("/search?q=wallet"));

        assert!(!widgets.navigation.is_open(MenuId::Search));
        assert!(matches!(
            widgets.pages.vm().page,
            PageView::SearchResults(results) if results.query == "wallet"
        ));
    }

    #[test]
    fn given_closed_shell_when_route_changes_to_same_route_then_reset_is_idempotent()
     {
        let mut widgets = Widgets::for_tests();

        let _task = reset(&mut widgets, &RouteKey::home());
        let _task = reset(&mut widgets, &RouteKey::home());

        assert_eq!(widgets.navigation.open_menu(), None);
        assert_eq!(widgets.search.query(), "");
    }
}
