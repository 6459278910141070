mod messages;
mod state;
mod track;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::media::MediaList;
use crate::theme::Theme;
use iced::{Size, window};

/// Helper to launch the gallery with the provided media.
pub fn run_app(list: MediaList, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(
            state::MIN_WINDOW_WIDTH,
            state::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    };

    iced::application("Swipe Gallery", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(list, config))
}
