pub(crate) mod brand;
pub(crate) mod desktop_bar;
pub(crate) mod dropdown;
pub(crate) mod menu_rows;
pub(crate) mod mobile_panel;
pub(crate) mod mobile_toggle;
pub(crate) mod search_toggle;
