use iced::widget::{Space, Stack, button, column, container, row, text};
use iced::{Element, Length, Padding, Theme, alignment};

use super::{App, AppEvent};
use crate::layout::{BRAND_GAP, HEADER_HEIGHT, HEADER_PADDING_X, MENU_PADDING};
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::language::view::language_picker;
use crate::widgets::language::{LanguageEvent, Translator};
use crate::widgets::navigation::view::{
    brand, desktop_bar, dropdown, menu_rows, mobile_panel, mobile_toggle,
    search_toggle,
};
use crate::widgets::navigation::{MenuId, NavigationEvent, NavigationIntent};
use crate::widgets::pages::PagesEvent;
use crate::widgets::pages::view::page_content;
use crate::widgets::search::SearchEvent;
use crate::widgets::search::view::search_box;

const HEADER_SEARCH_WIDTH: f32 = 260.0;
const HEADER_ITEM_SPACING: f32 = 8.0;
const SEARCH_PANEL_WIDTH: f32 = 420.0;

/// Render the root application view.
pub(crate) fn view(
    app: &App,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(&app.theme);
    let translator = app.widgets.language.translator();
    let class = app.widgets.viewport.class();
    let window_width = app.widgets.viewport.width().unwrap_or_default();
    let navigation = app.widgets.navigation.vm();
    let current_path = app.widgets.router.current().path();

    let header = if class.is_narrow_nav {
        view_narrow_header(app, theme, translator, class.is_compact_brand)
    } else {
        view_desktop_header(app, theme, translator, current_path)
    };

    let content = page_content::view(page_content::PageContentProps {
        vm: app.widgets.pages.vm(),
        can_go_back: app.widgets.router.can_go_back(),
        translator,
        theme,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Pages(PagesEvent::Intent(intent)));

    let base = column![header, content]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![base.into()];

    let rows = menu_rows::MenuRowsProps {
        menu: MenuId::Mobile,
        vm: navigation,
        current_path,
        translator,
        theme,
        fonts: &app.fonts,
    };

    if class.is_narrow_nav {
        if navigation.is_open(MenuId::Mobile) {
            layers.push(
                mobile_panel::view(mobile_panel::MobilePanelProps {
                    rows,
                    window_width,
                })
                .map(navigation_event),
            );
        }
    } else if let Some(menu) = navigation
        .open_menu
        .filter(|menu| MenuId::DESKTOP.contains(menu))
    {
        layers.push(
            dropdown::view(dropdown::DropdownProps {
                rows: menu_rows::MenuRowsProps { menu, ..rows },
            })
            .map(navigation_event),
        );
    }

    if navigation.is_open(MenuId::Search) {
        layers.push(view_search_panel(app, theme, translator));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_desktop_header<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
    translator: Translator,
    current_path: &'a str,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let brand = brand::view(brand::BrandProps {
        is_compact: false,
        translator,
        theme,
        fonts: &app.fonts,
    })
    .map(navigation_event);

    let bar = desktop_bar::view(desktop_bar::DesktopBarProps {
        vm: app.widgets.navigation.vm(),
        current_path,
        translator,
        theme,
        fonts: &app.fonts,
    })
    .map(navigation_event);

    let search = search_box::view(search_box::SearchBoxProps {
        query: app.widgets.search.query(),
        placeholder: translator.text("searchPlaceholder"),
        submit_label: translator.text("search"),
        width: Length::Fixed(HEADER_SEARCH_WIDTH),
        theme,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Search(SearchEvent::Intent(intent)));

    let content = row![
        Space::new().width(Length::Fixed(HEADER_PADDING_X)),
        brand,
        Space::new().width(Length::Fixed(BRAND_GAP)),
        bar,
        Space::new().width(Length::Fill),
        search,
        Space::new().width(Length::Fixed(HEADER_ITEM_SPACING)),
        view_language_picker(app),
        Space::new().width(Length::Fixed(HEADER_PADDING_X)),
    ]
    .align_y(alignment::Vertical::Center);

    view_header_container(content.into(), theme)
}

fn view_narrow_header<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
    translator: Translator,
    is_compact_brand: bool,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let brand = brand::view(brand::BrandProps {
        is_compact: is_compact_brand,
        translator,
        theme,
        fonts: &app.fonts,
    })
    .map(navigation_event);

    let search_toggle = search_toggle::view(search_toggle::SearchToggleProps {
        is_open: app.widgets.navigation.is_open(MenuId::Search),
        theme,
        fonts: &app.fonts,
    })
    .map(navigation_event);

    let mobile_toggle = mobile_toggle::view(mobile_toggle::MobileToggleProps {
        is_open: app.widgets.navigation.is_open(MenuId::Mobile),
        theme,
        fonts: &app.fonts,
    })
    .map(navigation_event);

    let content = row![
        Space::new().width(Length::Fixed(HEADER_PADDING_X)),
        brand,
        Space::new().width(Length::Fill),
        search_toggle,
        Space::new().width(Length::Fixed(HEADER_ITEM_SPACING)),
        view_language_picker(app),
        Space::new().width(Length::Fixed(HEADER_ITEM_SPACING)),
        mobile_toggle,
        Space::new().width(Length::Fixed(HEADER_PADDING_X)),
    ]
    .align_y(alignment::Vertical::Center);

    view_header_container(content.into(), theme)
}

fn view_header_container<'a>(
    content: Element<'a, AppEvent, Theme, iced::Renderer>,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(menu_style::header_style(theme))
        .into()
}

fn view_language_picker(
    app: &App,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    language_picker::view(language_picker::LanguagePickerProps {
        active: app.widgets.language.active(),
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Language(LanguageEvent::Intent(intent)))
}

/// Search overlay anchored to the right edge under the header.
fn view_search_panel<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
    translator: Translator,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let search = search_box::view(search_box::SearchBoxProps {
        query: app.widgets.search.query(),
        placeholder: translator.text("searchPlaceholder"),
        submit_label: translator.text("search"),
        width: Length::Fill,
        theme,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Search(SearchEvent::Intent(intent)));

    let close_label =
        text(translator.text("closeSearch")).size(app.fonts.small_size);
    let close = button(close_label)
        .style(menu_style::menu_row_style(theme, false))
        .on_press(navigation_event(NavigationIntent::CloseMenu(
            MenuId::Search,
        )));

    let hint = text(translator.text("searchHint"))
        .size(app.fonts.small_size)
        .color(theme.palette().dim_foreground);

    let panel = container(
        column![search, hint, close]
            .spacing(HEADER_ITEM_SPACING)
            .align_x(alignment::Horizontal::Right),
    )
    .padding(MENU_PADDING * 2.0)
    .width(Length::Fixed(SEARCH_PANEL_WIDTH))
    .style(menu_style::menu_panel_style(theme));

    container(panel)
        .padding(Padding {
            top: HEADER_HEIGHT,
            right: HEADER_PADDING_X,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .into()
}

fn navigation_event(intent: NavigationIntent) -> AppEvent {
    AppEvent::Navigation(NavigationEvent::Intent(intent))
}
