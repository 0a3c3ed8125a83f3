use serde::Deserialize;

use super::errors::CatalogError;

/// Identifier of an expandable entry inside a menu.
pub(crate) type SubmenuId = String;

/// Top-level navigation regions. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MenuId {
    Main,
    Tools,
    Resources,
    Mobile,
    Search,
}

impl MenuId {
    /// Menus whose regions are watched for outside pointer presses.
    pub(crate) const TRACKED: [MenuId; 4] =
        [MenuId::Main, MenuId::Tools, MenuId::Resources, MenuId::Mobile];

    /// Dropdown menus of the desktop bar, in bar order.
    pub(crate) const DESKTOP: [MenuId; 3] =
        [MenuId::Main, MenuId::Tools, MenuId::Resources];

    /// Translation key of the trigger label.
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            MenuId::Main => "foundation",
            MenuId::Tools => "tools",
            MenuId::Resources => "resources",
            MenuId::Mobile => "menu",
            MenuId::Search => "search",
        }
    }
}

/// Visual tag rendered in front of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MenuIcon {
    Home,
    Layers,
    Chart,
    Scroll,
    Info,
    File,
    Road,
    Cart,
    Coins,
    Shield,
    Scale,
}

impl MenuIcon {
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            MenuIcon::Home => "⌂",
            MenuIcon::Layers => "≡",
            MenuIcon::Chart => "▤",
            MenuIcon::Scroll => "§",
            MenuIcon::Info => "ℹ",
            MenuIcon::File => "▭",
            MenuIcon::Road => "➝",
            MenuIcon::Cart => "◈",
            MenuIcon::Coins => "◎",
            MenuIcon::Shield => "◆",
            MenuIcon::Scale => "⚖",
        }
    }
}

/// A navigation entry: either a leaf with an `href` or a branch with a
/// non-empty submenu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct MenuItem {
    name: String,
    #[serde(default)]
    label_key: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    submenu: Vec<MenuItem>,
    #[serde(default)]
    icon: Option<MenuIcon>,
    #[serde(default)]
    badge: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Borrowed view of what a menu item does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItemKind<'a> {
    Leaf { href: &'a str },
    Branch { children: &'a [MenuItem] },
}

impl MenuItem {
    /// Build a validated item from its parts.
    #[cfg(test)]
    pub(crate) fn new(
        name: impl Into<String>,
        href: Option<String>,
        submenu: Vec<MenuItem>,
    ) -> Result<Self, CatalogError> {
        let item = Self {
            name: name.into(),
            label_key: None,
            href,
            submenu,
            icon: None,
            badge: None,
            description: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Build a navigable leaf.
    #[cfg(test)]
    pub(crate) fn leaf(
        name: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label_key: None,
            href: Some(href.into()),
            submenu: Vec::new(),
            icon: None,
            badge: None,
            description: None,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn label_key(&self) -> Option<&str> {
        self.label_key.as_deref()
    }

    pub(crate) fn icon(&self) -> Option<MenuIcon> {
        self.icon
    }

    pub(crate) fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Return the leaf target or the branch children.
    ///
    /// Only meaningful for validated items; an invalid item reports itself
    /// as an empty branch.
    pub(crate) fn kind(&self) -> MenuItemKind<'_> {
        match (&self.href, self.submenu.is_empty()) {
            (Some(href), true) => MenuItemKind::Leaf { href },
            _ => MenuItemKind::Branch {
                children: &self.submenu,
            },
        }
    }

    /// Return whether this entry, or any entry below it, targets `path`.
    pub(crate) fn is_current(&self, path: &str) -> bool {
        match self.kind() {
            MenuItemKind::Leaf { href } => href == path,
            MenuItemKind::Branch { children } => {
                children.iter().any(|child| child.is_current(path))
            },
        }
    }

    /// Check the leaf/branch invariant for this item and its children.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidItem {
                name: self.name.clone(),
                reason: "name must not be empty",
            });
        }

        match (&self.href, self.submenu.is_empty()) {
            (Some(_), false) => Err(CatalogError::InvalidItem {
                name: self.name.clone(),
                reason: "item has both href and submenu",
            }),
            (None, true) => Err(CatalogError::InvalidItem {
                name: self.name.clone(),
                reason: "item has neither href nor submenu",
            }),
            (Some(href), true) if !href.starts_with('/') => {
                Err(CatalogError::InvalidItem {
                    name: self.name.clone(),
                    reason: "href must be an absolute site path",
                })
            },
            _ => self.submenu.iter().try_for_each(MenuItem::validate),
        }
    }
}

/// Static menu trees for every top-level menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct MenuCatalog {
    #[serde(default)]
    main: Vec<MenuItem>,
    #[serde(default)]
    tools: Vec<MenuItem>,
    #[serde(default)]
    resources: Vec<MenuItem>,
    #[serde(default)]
    mobile: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Return the entries rendered inside `menu`.
    pub(crate) fn items(&self, menu: MenuId) -> &[MenuItem] {
        match menu {
            MenuId::Main => &self.main,
            MenuId::Tools => &self.tools,
            MenuId::Resources => &self.resources,
            MenuId::Mobile => &self.mobile,
            MenuId::Search => &[],
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        [&self.main, &self.tools, &self.resources, &self.mobile]
            .into_iter()
            .flatten()
            .try_for_each(MenuItem::validate)
    }
}

/// Read-only snapshot consumed by the navigation views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel<'a> {
    pub(crate) catalog: &'a MenuCatalog,
    pub(crate) open_menu: Option<MenuId>,
    pub(crate) expanded_submenu: Option<&'a str>,
}

impl NavigationViewModel<'_> {
    pub(crate) fn is_open(&self, menu: MenuId) -> bool {
        self.open_menu == Some(menu)
    }

    pub(crate) fn is_expanded(&self, name: &str) -> bool {
        self.expanded_submenu == Some(name)
    }

    /// Number of rows a menu occupies when rendered open.
    pub(crate) fn visible_rows(&self, menu: MenuId) -> usize {
        self.catalog
            .items(menu)
            .iter()
            .map(|item| match item.kind() {
                MenuItemKind::Branch { children }
                    if self.is_expanded(item.name()) =>
                {
                    1 + children.len()
                },
                _ => 1,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        MenuCatalog, MenuId, MenuItem, MenuItemKind, NavigationViewModel,
    };
    use crate::widgets::navigation::errors::CatalogError;

    #[test]
    fn given_href_and_submenu_when_constructing_item_then_it_is_rejected() {
        let child = MenuItem::leaf("Manifesto", "/manifesto");
        let result = MenuItem::new(
            "Overview",
            Some(String::from("/overview")),
            vec![child],
        );

        assert!(matches!(result, Err(CatalogError::InvalidItem { .. })));
    }

    #[test]
    fn given_neither_href_nor_submenu_when_constructing_item_then_it_is_rejected()
     {
        let result = MenuItem::new("Overview", None, Vec::new());

        assert!(matches!(result, Err(CatalogError::InvalidItem { .. })));
    }

    #[test]
    fn given_leaf_or_branch_when_constructing_item_then_kind_matches() {
        let leaf =
            MenuItem::new("Charts", Some(String::from("/charts")), vec![])
                .expect("leaf should be valid");
        assert_eq!(leaf.kind(), MenuItemKind::Leaf { href: "/charts" });

        let branch = MenuItem::new(
            "Legal",
            None,
            vec![MenuItem::leaf("Fees", "/openexchange/fees")],
        )
        .expect("branch should be valid");
        assert!(matches!(
            branch.kind(),
            MenuItemKind::Branch { children } if children.len() == 1
        ));
    }

    #[test]
    fn given_nested_invalid_child_when_validating_then_error_names_child() {
        let bad_child = MenuItem {
            name: String::from("Broken"),
            label_key: None,
            href: None,
            submenu: Vec::new(),
            icon: None,
            badge: None,
            description: None,
        };
        let parent = MenuItem {
            name: String::from("Legal"),
            label_key: None,
            href: None,
            submenu: vec![bad_child],
            icon: None,
            badge: None,
            description: None,
        };

        match parent.validate() {
            Err(CatalogError::InvalidItem { name, .. }) => {
                assert_eq!(name, "Broken");
            },
            other => panic!("expected invalid child, got {other:?}"),
        }
    }

    #[test]
    fn given_relative_href_when_validating_then_item_is_rejected() {
        let result =
            MenuItem::new("Charts", Some(String::from("charts")), vec![]);

        assert!(result.is_err());
    }

    #[test]
    fn given_branch_with_matching_child_when_checking_current_then_branch_is_current()
     {
        let branch = MenuItem::new(
            "Resources",
            None,
            vec![
                MenuItem::leaf("Wallet Guide", "/resources/wallet-guide"),
                MenuItem::leaf("Developers", "/resources/developers"),
            ],
        )
        .expect("branch should be valid");

        assert!(branch.is_current("/resources/developers"));
        assert!(!branch.is_current("/charts"));
    }

    #[test]
    fn given_expanded_branch_when_counting_rows_then_children_are_included() {
        let catalog: MenuCatalog = serde_json::from_str(
            r#"{
                "main": [
                    { "name": "Overview", "submenu": [
                        { "name": "Home", "href": "/" },
                        { "name": "About", "href": "/about" }
                    ]},
                    { "name": "Charts", "href": "/charts" }
                ]
            }"#,
        )
        .expect("catalog should parse");

        let collapsed = NavigationViewModel {
            catalog: &catalog,
            open_menu: Some(MenuId::Main),
            expanded_submenu: None,
        };
        assert_eq!(collapsed.visible_rows(MenuId::Main), 2);

        let expanded = NavigationViewModel {
            expanded_submenu: Some("Overview"),
            ..collapsed
        };
        assert_eq!(expanded.visible_rows(MenuId::Main), 4);
    }
}
