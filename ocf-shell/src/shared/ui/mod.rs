pub(crate) mod fonts;
pub(crate) mod menu_style;
pub(crate) mod theme;
