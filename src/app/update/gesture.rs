use super::super::messages::TrackPointer;
use super::super::state::App;
use std::time::Instant;
use tracing::trace;

impl App {
    pub(super) fn handle_pointer_pressed(&mut self, pointer: TrackPointer, now: Instant) {
        self.carousel.set_viewport_width(pointer.width);
        self.carousel
            .gesture_start(pointer.kind, pointer.x, pointer.y);
        if self.carousel.is_dragging() {
            self.motion.follow(
                self.carousel.current_index(),
                true,
                0.0,
                pointer.width,
                now,
            );
        } else {
            trace!(kind = ?pointer.kind, "Press ignored while settling");
        }
    }

    pub(super) fn handle_pointer_moved(&mut self, pointer: TrackPointer, now: Instant) {
        self.carousel.set_viewport_width(pointer.width);
        let mut events = Vec::new();
        let outcome = self.carousel.gesture_move(pointer.x, pointer.y, &mut events);
        if !outcome.capture {
            trace!(axis = ?outcome.axis, "Move not claimed by the track");
        }
        self.apply_carousel_events(&events, 0.0, now);
    }

    pub(super) fn handle_pointer_released(&mut self, pointer: TrackPointer, now: Instant) {
        self.carousel.set_viewport_width(pointer.width);
        let released_offset = self.carousel.drag_offset();
        if self.carousel.is_dragging() {
            trace!(
                axis = ?self.carousel.gesture_axis(),
                released_offset,
                "Pointer released"
            );
        }
        let mut events = Vec::new();
        self.carousel.gesture_end(now, &mut events);
        self.apply_carousel_events(&events, released_offset, now);
    }

    pub(super) fn handle_pointer_left(&mut self, now: Instant) {
        let released_offset = self.carousel.drag_offset();
        let mut events = Vec::new();
        self.carousel.pointer_left(now, &mut events);
        self.apply_carousel_events(&events, released_offset, now);
    }
}
