use super::model::{MenuCatalog, MenuId, SubmenuId};

/// Single source of truth for which menu and which submenu are open.
#[derive(Debug, Default)]
pub(crate) struct NavigationState {
    catalog: MenuCatalog,
    open_menu: Option<MenuId>,
    submenu: Option<ExpandedSubmenu>,
}

/// A submenu remembers the menu that was open when it was expanded and is
/// only visible while that menu stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExpandedSubmenu {
    name: SubmenuId,
    owner: Option<MenuId>,
}

impl NavigationState {
    pub(crate) fn with_catalog(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    // --- Read access ---

    pub(crate) fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub(crate) fn open_menu(&self) -> Option<MenuId> {
        self.open_menu
    }

    pub(crate) fn is_open(&self, menu: MenuId) -> bool {
        self.open_menu == Some(menu)
    }

    /// Return the expanded submenu, if it belongs to the open menu.
    pub(crate) fn expanded_submenu(&self) -> Option<&str> {
        self.submenu
            .as_ref()
            .filter(|submenu| submenu.owner == self.open_menu)
            .map(|submenu| submenu.name.as_str())
    }

    // --- Write access ---

    /// Open `menu`, closing every other top-level menu.
    pub(super) fn open(&mut self, menu: MenuId) {
        self.open_menu = Some(menu);
    }

    /// Close `menu` and clear the submenu when `menu` is the open one.
    pub(super) fn close(&mut self, menu: MenuId) {
        if self.open_menu == Some(menu) {
            self.open_menu = None;
            self.submenu = None;
        }
    }

    pub(super) fn toggle(&mut self, menu: MenuId) {
        if self.is_open(menu) {
            self.close(menu);
        } else {
            self.open(menu);
        }
    }

    /// Expand `name`, or collapse it when it is already expanded.
    pub(super) fn toggle_submenu(&mut self, name: SubmenuId) {
        if self.expanded_submenu() == Some(name.as_str()) {
            self.submenu = None;
        } else {
            self.submenu = Some(ExpandedSubmenu {
                name,
                owner: self.open_menu,
            });
        }
    }

    pub(super) fn collapse_submenu(&mut self) {
        self.submenu = None;
    }

    pub(super) fn close_all(&mut self) {
        self.open_menu = None;
        self.submenu = None;
    }
}
