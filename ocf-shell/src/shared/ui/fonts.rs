use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) regular: Font,
    pub(crate) bold: Font,
    pub(crate) size: f32,
    pub(crate) small_size: f32,
    pub(crate) title_size: f32,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            regular: Font::default(),
            bold: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 15.0,
            small_size: 12.0,
            title_size: 28.0,
        }
    }
}
