use super::super::super::messages::Message;
use super::super::super::state::{App, SlideStatus};
use super::super::Effect;
use crate::carousel::CarouselEvent;
use crate::media::{collect_entries, parse_entries};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut now = Instant::now();

        match message {
            Message::PointerPressed(pointer) => self.handle_pointer_pressed(pointer, now),
            Message::PointerMoved(pointer) => self.handle_pointer_moved(pointer, now),
            Message::PointerReleased(pointer) => self.handle_pointer_released(pointer, now),
            Message::PointerLeft => self.handle_pointer_left(now),
            Message::Next => self.handle_next(now),
            Message::Previous => self.handle_previous(now),
            Message::DotPressed(index) => self.handle_go_to(index, now),
            Message::ReplaceMedia(entries) => self.handle_replace_media(entries, &mut effects),
            Message::MediaLoaded {
                generation,
                index,
                result,
            } => self.handle_media_loaded(generation, index, result),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(at) => {
                now = at;
                self.handle_tick(now);
            }
            Message::Quit => effects.push(Effect::Quit),
        }

        self.sync_track(now);
        effects
    }

    /// Log controller notifications and start the matching track motion.
    pub(in crate::app) fn apply_carousel_events(
        &mut self,
        events: &[CarouselEvent],
        released_offset: f32,
        now: Instant,
    ) {
        let mut settle_started = false;
        for event in events {
            match *event {
                CarouselEvent::IndexChanged { previous, current } => {
                    info!(
                        previous,
                        current,
                        total = self.carousel.len(),
                        "Slide changed"
                    );
                }
                CarouselEvent::SettleStarted { generation } => {
                    trace!(generation, "Settle window started");
                    settle_started = true;
                }
                CarouselEvent::Settled { generation } => {
                    trace!(generation, "Settle window elapsed");
                }
                CarouselEvent::DragUpdated { offset } => trace!(offset, "Drag updated"),
            }
        }
        if settle_started {
            self.motion.follow(
                self.carousel.current_index(),
                false,
                released_offset,
                self.carousel.viewport_width(),
                now,
            );
        }
    }

    fn handle_replace_media(&mut self, entries: Vec<String>, effects: &mut Vec<Effect>) {
        let entries = match collect_entries(&entries) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Keeping current media: {err:#}");
                return;
            }
        };
        let sources = parse_entries(&entries);
        self.media.list.replace(sources);
        self.media.slides = vec![SlideStatus::Pending; self.media.list.len()];
        self.carousel.reset(self.media.list.len());
        self.motion.snap_to(0.0);
        info!(
            slides = self.media.list.len(),
            generation = self.media.list.generation(),
            "Replaced media list"
        );
        if !self.media.list.is_empty() {
            effects.push(self.preload_effect());
        }
    }

    fn handle_media_loaded(
        &mut self,
        generation: u64,
        index: usize,
        result: Result<crate::media::LoadedMedia, String>,
    ) {
        let status = match result {
            Ok(media) => SlideStatus::from_loaded(media),
            Err(error) => {
                warn!(index, "Preload failed: {error}");
                SlideStatus::Failed
            }
        };
        if self.media.accept(generation, index, status) {
            debug!(
                index,
                ready = self.media.ready_count(),
                total = self.media.slides.len(),
                "Preload result stored"
            );
        } else {
            trace!(generation, index, "Dropped stale preload result");
        }
    }

    fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
        // The canvas reports its own width with every pointer event; until
        // then the window width is the best estimate.
        if !self.carousel.is_dragging() {
            self.carousel.set_viewport_width(width);
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        let mut events = Vec::new();
        self.carousel.tick(now, &mut events);
        self.apply_carousel_events(&events, 0.0, now);
    }
}
