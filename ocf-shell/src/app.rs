#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme, window};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::widgets::language::{LanguageEvent, LanguageWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::pages::{PagesEvent, PagesWidget};
use crate::widgets::pointer_watch::{PointerWatchEvent, PointerWatchWidget};
use crate::widgets::router::{RouterEvent, RouterWidget};
use crate::widgets::search::{SearchEvent, SearchWidget};
use crate::widgets::viewport::{ViewportEvent, ViewportWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Menu state store
    Navigation(NavigationEvent),
    // Outside-interaction watcher
    PointerWatch(PointerWatchEvent),
    // Responsive mode detector
    Viewport(ViewportEvent),
    // Search dispatch
    Search(SearchEvent),
    // Host router
    Router(RouterEvent),
    // Page content
    Pages(PagesEvent),
    // Language switcher
    Language(LanguageEvent),
    // Direct operations
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) pointer_watch: PointerWatchWidget,
    pub(crate) viewport: ViewportWidget,
    pub(crate) search: SearchWidget,
    pub(crate) router: RouterWidget,
    pub(crate) pages: PagesWidget,
    pub(crate) language: LanguageWidget,
}

impl Widgets {
    fn load() -> Self {
        Self {
            navigation: NavigationWidget::new(),
            pointer_watch: PointerWatchWidget::new(),
            viewport: ViewportWidget::new(),
            search: SearchWidget::new(),
            router: RouterWidget::new(),
            pages: PagesWidget::new(),
            language: LanguageWidget::load(),
        }
    }

    /// Widgets with English selected and no settings file access.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            navigation: NavigationWidget::new(),
            pointer_watch: PointerWatchWidget::new(),
            viewport: ViewportWidget::new(),
            search: SearchWidget::new(),
            router: RouterWidget::new(),
            pages: PagesWidget::new(),
            language: LanguageWidget::with_language(
                crate::widgets::language::Language::En,
            ),
        }
    }
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = App {
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            widgets: Widgets::load(),
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        let translator = self.widgets.language.translator();
        format!(
            "{} | {}",
            translator.text("brand"),
            self.widgets.router.current()
        )
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
