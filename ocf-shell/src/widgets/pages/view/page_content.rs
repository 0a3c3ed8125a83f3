use iced::widget::{
    Column, button, column, container, row, scrollable, text, text_input,
};
use iced::{Border, Element, Length, alignment};

use super::super::event::PagesIntent;
use super::super::model::{
    LEGAL_LINKS, PageRecord, PageView, PagesViewModel, SearchResults,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::menu_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::language::Translator;

const CONTENT_MAX_WIDTH: f32 = 880.0;
const CONTENT_PADDING: f32 = 32.0;
const SECTION_SPACING: f32 = 16.0;
const CARD_PADDING: f32 = 16.0;
const CHIP_PADDING: [f32; 2] = [4.0, 12.0];

/// Props for rendering the content area under the header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageContentProps<'a> {
    pub(crate) vm: PagesViewModel<'a>,
    pub(crate) can_go_back: bool,
    pub(crate) translator: Translator,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the current page, search results or not-found notice.
pub(crate) fn view(props: PageContentProps<'_>) -> Element<'_, PagesIntent> {
    let body = match props.vm.page {
        PageView::Page(page) => page_body(page, props),
        PageView::SearchResults(results) => results_body(results, props),
        PageView::NotFound { route } => not_found_body(route, props),
    };

    let mut content = Column::new().spacing(SECTION_SPACING);
    if props.can_go_back {
        content = content.push(
            button(text("←").size(props.fonts.size))
                .style(menu_style::menu_row_style(props.theme, false))
                .on_press(PagesIntent::Back),
        );
    }
    let content = content.push(body).push(footer(props));

    let centered = container(content.max_width(CONTENT_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(CONTENT_PADDING);

    scrollable(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page_body<'a>(
    page: &'a PageRecord,
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    let palette = props.theme.palette();

    column![
        category_chip(&page.category, props),
        text(page.title.as_str())
            .size(props.fonts.title_size)
            .font(props.fonts.bold),
        text(page.summary.as_str())
            .size(props.fonts.size)
            .color(palette.dim_foreground),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

fn results_body<'a>(
    results: &'a SearchResults,
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    let placeholder = props.translator.text("searchPlaceholder");
    let input = row![
        text_input(&placeholder, props.vm.results_query)
            .on_input(PagesIntent::ResultsQueryChanged)
            .on_submit(PagesIntent::ResultsSubmit)
            .padding(CARD_PADDING / 2.0)
            .size(props.fonts.size),
        button(text(props.translator.text("search")).font(props.fonts.bold))
            .padding(CARD_PADDING / 2.0)
            .style(menu_style::primary_button_style(props.theme))
            .on_press(PagesIntent::ResultsSubmit),
    ]
    .spacing(SECTION_SPACING / 2.0)
    .align_y(alignment::Vertical::Center);

    let headline = text(results.headline())
        .size(props.fonts.title_size)
        .font(props.fonts.bold);

    let mut body = column![input, headline].spacing(SECTION_SPACING);

    if results.matches.is_empty() {
        let palette = props.theme.palette();
        return body
            .push(
                text(props.translator.text("noResults"))
                    .color(palette.dim_foreground),
            )
            .push(
                text(props.translator.text("noResultsHint"))
                    .color(palette.dim_foreground),
            )
            .push(return_home_button(props))
            .into();
    }

    let chips = results
        .categories
        .iter()
        .fold(row![].spacing(SECTION_SPACING / 2.0), |chips, (name, count)| {
            chips.push(category_chip(&format!("{name} ({count})"), props))
        });
    body = body.push(chips);

    results
        .matches
        .iter()
        .fold(body, |body, page| body.push(result_card(page, props)))
        .into()
}

fn result_card<'a>(
    page: &'a PageRecord,
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    let palette = props.theme.palette();
    let content = column![
        text(page.title.as_str())
            .size(props.fonts.size + 4.0)
            .font(props.fonts.bold),
        text(page.summary.as_str()).color(palette.dim_foreground),
        text(page.route.as_str())
            .size(props.fonts.small_size)
            .color(palette.accent),
    ]
    .spacing(SECTION_SPACING / 4.0);

    button(content)
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(menu_style::menu_row_style(props.theme, false))
        .on_press(PagesIntent::OpenRoute {
            route: page.route.clone(),
        })
        .into()
}

fn not_found_body<'a>(
    route: &'a str,
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    column![
        text(props.translator.text("notFound"))
            .size(props.fonts.title_size)
            .font(props.fonts.bold),
        text(route)
            .size(props.fonts.small_size)
            .color(props.theme.palette().dim_foreground),
        return_home_button(props),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

fn footer(props: PageContentProps<'_>) -> Element<'_, PagesIntent> {
    let spacing = SECTION_SPACING / 2.0;
    let links = LEGAL_LINKS.iter().fold(row![].spacing(spacing), |row, link| {
        row.push(
            button(
                text(props.translator.text(link.label_key))
                    .size(props.fonts.small_size),
            )
            .style(menu_style::menu_row_style(props.theme, false))
            .on_press(PagesIntent::OpenRoute {
                route: link.route.to_string(),
            }),
        )
    });
    let copyright = text(props.translator.text("copyright"))
        .size(props.fonts.small_size)
        .color(props.theme.palette().dim_foreground);

    column![links, copyright]
        .spacing(SECTION_SPACING / 4.0)
        .into()
}

fn return_home_button<'a>(
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    button(text(props.translator.text("returnHome")).font(props.fonts.bold))
        .padding(CARD_PADDING / 2.0)
        .style(menu_style::primary_button_style(props.theme))
        .on_press(PagesIntent::OpenRoute {
            route: String::from(crate::widgets::router::model::HOME_ROUTE),
        })
        .into()
}

fn category_chip<'a>(
    label: &str,
    props: PageContentProps<'a>,
) -> Element<'a, PagesIntent> {
    let palette = props.theme.palette().clone();

    container(text(label.to_string()).size(props.fonts.small_size))
        .padding(CHIP_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.overlay.into()),
            text_color: Some(palette.dim_foreground),
            border: Border {
                width: 0.0,
                color: palette.overlay,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}

