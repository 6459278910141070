//! Headless swipe carousel state machine.
//!
//! The controller owns the current slide index, the live drag offset and the
//! settle window that follows every programmatic move or released gesture.
//! It knows nothing about the GUI toolkit: hosts feed it pointer coordinates
//! and timestamps, read its queries when drawing, and react to the
//! [`CarouselEvent`]s it pushes.

mod motion;

pub use motion::TrackMotion;

use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Thresholds that shape gesture interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTuning {
    /// How long new input is ignored after a move commits or snaps back.
    pub settle: Duration,
    /// Absolute swipe distance (px) that always commits.
    pub min_swipe_px: f32,
    /// Fraction of the viewport width that also commits.
    pub swipe_fraction: f32,
    /// Movement (px) needed before the gesture axis is decided.
    pub axis_lock_px: f32,
    /// Scale applied to drags past the first or last slide.
    pub edge_resistance: f32,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(300),
            min_swipe_px: 40.0,
            swipe_fraction: 0.15,
            axis_lock_px: 5.0,
            edge_resistance: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureAxis {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Pending expiry of the settle window. A newer timer always replaces an
/// older one; expiries are matched by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTimer {
    pub generation: u64,
    pub deadline: Instant,
}

/// Notifications for hosts that do not observe the state reactively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    IndexChanged { previous: usize, current: usize },
    DragUpdated { offset: f32 },
    SettleStarted { generation: u64 },
    Settled { generation: u64 },
}

/// Result of feeding one pointer move into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub axis: GestureAxis,
    /// The host should keep this move from reaching scroll containers.
    pub capture: bool,
}

impl MoveOutcome {
    const IGNORED: Self = Self {
        axis: GestureAxis::Undetermined,
        capture: false,
    };
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    current_index: usize,
    drag_offset: f32,
    is_dragging: bool,
    gesture_axis: GestureAxis,
    start: (f32, f32),
    pointer_kind: PointerKind,
    viewport_width: f32,
    settle: Option<SettleTimer>,
    settle_generation: u64,
    tuning: CarouselTuning,
}

impl CarouselController {
    pub fn new(len: usize, tuning: CarouselTuning) -> Self {
        Self {
            len,
            current_index: 0,
            drag_offset: 0.0,
            is_dragging: false,
            gesture_axis: GestureAxis::Undetermined,
            start: (0.0, 0.0),
            pointer_kind: PointerKind::Touch,
            viewport_width: 0.0,
            settle: None,
            settle_generation: 0,
            tuning,
        }
    }

    /// Start over for a new media list. Any pending settle expiry becomes stale.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current_index = 0;
        self.clear_gesture();
        self.settle = None;
        self.settle_generation = self.settle_generation.wrapping_add(1);
        debug!(len, "Carousel reset");
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && width >= 0.0 {
            self.viewport_width = width;
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_transitioning(&self) -> bool {
        self.settle.is_some()
    }

    pub fn gesture_axis(&self) -> GestureAxis {
        self.gesture_axis
    }

    #[cfg(test)]
    pub fn settle_timer(&self) -> Option<SettleTimer> {
        self.settle
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.len
    }

    /// Horizontal translation of the slide track for a viewport `width`.
    ///
    /// `position` is the resting slide in slide units; hosts that animate
    /// pass their sampled position, others pass `current_index`. The live
    /// drag offset is added on top.
    pub fn track_offset(&self, position: f32, width: f32) -> f32 {
        -(position * width) + self.drag_offset
    }

    pub fn shows_counter(&self) -> bool {
        self.len > 1
    }

    pub fn shows_dots(&self) -> bool {
        self.len > 1
    }

    pub fn shows_previous_arrow(&self) -> bool {
        self.len > 1 && self.can_go_previous() && !self.is_dragging
    }

    pub fn shows_next_arrow(&self) -> bool {
        self.len > 1 && self.can_go_next() && !self.is_dragging
    }

    pub fn go_to_index(&mut self, index: usize, now: Instant, events: &mut Vec<CarouselEvent>) {
        if index >= self.len || index == self.current_index || self.is_transitioning() {
            trace!(
                index,
                current = self.current_index,
                transitioning = self.is_transitioning(),
                "Ignoring navigation request"
            );
            return;
        }
        self.begin_settle(now, events);
        let previous = self.current_index;
        self.current_index = index;
        self.drag_offset = 0.0;
        debug!(previous, current = index, "Navigated to slide");
        events.push(CarouselEvent::IndexChanged {
            previous,
            current: index,
        });
    }

    pub fn next(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        if self.can_go_next() {
            self.go_to_index(self.current_index + 1, now, events);
        }
    }

    pub fn previous(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        if self.can_go_previous() {
            self.go_to_index(self.current_index - 1, now, events);
        }
    }

    pub fn gesture_start(&mut self, kind: PointerKind, x: f32, y: f32) {
        if self.is_transitioning() || self.is_empty() {
            return;
        }
        self.start = (x, y);
        self.pointer_kind = kind;
        // A mouse press carries no scroll ambiguity.
        self.gesture_axis = match kind {
            PointerKind::Mouse => GestureAxis::Horizontal,
            PointerKind::Touch => GestureAxis::Undetermined,
        };
        self.is_dragging = true;
        self.drag_offset = 0.0;
        trace!(?kind, x, y, "Gesture started");
    }

    /// Axis the active gesture would have after moving to `(x, y)`, without
    /// mutating anything.
    pub fn resolve_axis(&self, x: f32, y: f32) -> GestureAxis {
        if !self.is_dragging || self.gesture_axis != GestureAxis::Undetermined {
            return self.gesture_axis;
        }
        let dx = (self.start.0 - x).abs();
        let dy = (self.start.1 - y).abs();
        let threshold = self.tuning.axis_lock_px;
        if dx > threshold || dy > threshold {
            if dx > dy {
                GestureAxis::Horizontal
            } else {
                GestureAxis::Vertical
            }
        } else {
            GestureAxis::Undetermined
        }
    }

    pub fn gesture_move(&mut self, x: f32, y: f32, events: &mut Vec<CarouselEvent>) -> MoveOutcome {
        if !self.is_dragging || self.is_transitioning() {
            return MoveOutcome::IGNORED;
        }
        if self.gesture_axis == GestureAxis::Undetermined {
            self.gesture_axis = self.resolve_axis(x, y);
            if self.gesture_axis != GestureAxis::Undetermined {
                trace!(axis = ?self.gesture_axis, "Gesture axis locked");
            }
        }
        if self.gesture_axis != GestureAxis::Horizontal {
            return MoveOutcome {
                axis: self.gesture_axis,
                capture: false,
            };
        }

        let mut offset = x - self.start.0;
        let at_first = self.current_index == 0 && offset > 0.0;
        let at_last = self.current_index + 1 >= self.len && offset < 0.0;
        if at_first || at_last {
            offset *= self.tuning.edge_resistance;
        }
        self.drag_offset = offset;
        events.push(CarouselEvent::DragUpdated { offset });
        MoveOutcome {
            axis: GestureAxis::Horizontal,
            capture: true,
        }
    }

    pub fn gesture_end(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        if !self.is_dragging {
            return;
        }
        let offset = self.drag_offset;
        let magnitude = offset.abs();
        let commit = magnitude > self.tuning.min_swipe_px
            || magnitude > self.tuning.swipe_fraction * self.viewport_width;
        let previous = self.current_index;
        if commit && offset < 0.0 && self.can_go_next() {
            self.current_index += 1;
        } else if commit && offset > 0.0 && self.can_go_previous() {
            self.current_index -= 1;
        }
        debug!(
            offset,
            commit,
            previous,
            current = self.current_index,
            "Gesture released"
        );

        self.clear_gesture();
        self.begin_settle(now, events);
        if self.current_index != previous {
            events.push(CarouselEvent::IndexChanged {
                previous,
                current: self.current_index,
            });
        }
    }

    /// The pointer left the carousel. Mouse drags end here exactly as on release.
    pub fn pointer_left(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        if self.is_dragging && self.pointer_kind == PointerKind::Mouse {
            self.gesture_end(now, events);
        }
    }

    /// Expire the settle window once its deadline has passed.
    pub fn tick(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        if let Some(timer) = self.settle {
            if now >= timer.deadline {
                self.settle_elapsed(timer.generation, events);
            }
        }
    }

    /// Clear the settle window started under `generation`. Stale generations
    /// are ignored.
    pub fn settle_elapsed(&mut self, generation: u64, events: &mut Vec<CarouselEvent>) {
        match self.settle {
            Some(timer) if timer.generation == generation => {
                self.settle = None;
                events.push(CarouselEvent::Settled { generation });
            }
            _ => {}
        }
    }

    fn begin_settle(&mut self, now: Instant, events: &mut Vec<CarouselEvent>) {
        self.settle_generation = self.settle_generation.wrapping_add(1);
        let timer = SettleTimer {
            generation: self.settle_generation,
            deadline: now + self.tuning.settle,
        };
        self.settle = Some(timer);
        events.push(CarouselEvent::SettleStarted {
            generation: timer.generation,
        });
    }

    fn clear_gesture(&mut self) {
        self.is_dragging = false;
        self.gesture_axis = GestureAxis::Undetermined;
        self.drag_offset = 0.0;
    }
}
