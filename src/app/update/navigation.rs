use super::super::state::App;
use std::time::Instant;

impl App {
    pub(super) fn handle_next(&mut self, now: Instant) {
        let mut events = Vec::new();
        self.carousel.next(now, &mut events);
        self.apply_carousel_events(&events, 0.0, now);
    }

    pub(super) fn handle_previous(&mut self, now: Instant) {
        let mut events = Vec::new();
        self.carousel.previous(now, &mut events);
        self.apply_carousel_events(&events, 0.0, now);
    }

    pub(super) fn handle_go_to(&mut self, index: usize, now: Instant) {
        let mut events = Vec::new();
        self.carousel.go_to_index(index, now, &mut events);
        self.apply_carousel_events(&events, 0.0, now);
    }
}
