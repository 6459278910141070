mod constants;
mod media;

use crate::carousel::{CarouselController, TrackMotion};
use crate::config::AppConfig;
use crate::media::MediaList;
use iced::Task;
use std::time::Instant;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use media::{MediaState, SlideStatus};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) carousel: CarouselController,
    pub(super) motion: TrackMotion,
    pub(super) media: MediaState,
    /// Track position in slides, sampled from `motion` on every update.
    pub(super) track_position: f32,
    pub(super) window_width: f32,
    pub(super) window_height: f32,
}

impl App {
    pub(super) fn bootstrap(list: MediaList, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let tuning = config.tuning();
        let mut app = App {
            carousel: CarouselController::new(list.len(), tuning),
            motion: TrackMotion::new(tuning.settle),
            media: MediaState::new(list),
            track_position: 0.0,
            window_width: config.window_width,
            window_height: config.window_height,
            config,
        };
        app.carousel.set_viewport_width(app.window_width);

        tracing::info!(
            slides = app.media.list.len(),
            settle_ms = tuning.settle.as_millis() as u64,
            night_mode = matches!(app.config.theme, crate::config::ThemeMode::Night),
            "Initialized app state"
        );

        let init_task = if app.media.list.is_empty() {
            tracing::warn!("No media to show; the carousel renders nothing");
            Task::none()
        } else {
            let effect = app.preload_effect();
            app.run_effect(effect)
        };
        (app, init_task)
    }

    pub(super) fn preload_effect(&self) -> Effect {
        Effect::Preload {
            generation: self.media.list.generation(),
            sources: self.media.list.sources().to_vec(),
        }
    }

    /// Refresh the sampled track position.
    pub(super) fn sync_track(&mut self, now: Instant) {
        self.track_position = self.motion.position(now);
    }

    /// A frame clock is needed while the settle window or animation is live.
    pub(super) fn needs_frames(&self, now: Instant) -> bool {
        self.carousel.is_transitioning() || self.motion.is_animating(now)
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    config.window_width = if config.window_width.is_finite() {
        config.window_width.clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH)
    } else {
        MIN_WINDOW_WIDTH
    };
    config.window_height = if config.window_height.is_finite() {
        config.window_height.clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT)
    } else {
        MIN_WINDOW_HEIGHT
    };
    normalize_key_binding(&mut config.key_next, "arrowright".to_string());
    normalize_key_binding(&mut config.key_previous, "arrowleft".to_string());
    normalize_key_binding(&mut config.key_first, "home".to_string());
    normalize_key_binding(&mut config.key_last, "end".to_string());
    normalize_key_binding(&mut config.key_quit, "q".to_string());
}
