#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::config;
use crate::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::color_list::{
    ColorListEffect, ColorListEvent, ColorListWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 420.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Color list widget
    ColorListUi(ColorListEvent),
    ColorListEffect(ColorListEffect),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_app_config();
        log::info!(
            "starting with {} layout, {} grid columns",
            config.layout().as_str(),
            config.grid_columns()
        );

        let widgets = Widgets {
            color_list: ColorListWidget::new(
                config.layout(),
                config.grid_columns(),
            ),
        };

        let app = App {
            theme: AppTheme::default(),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Hex Color Manager")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
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
